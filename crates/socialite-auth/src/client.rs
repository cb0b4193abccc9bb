//! Authorization code flow driver
//!
//! [`SocialProvider`] runs the same three steps for every provider:
//! authorization URL → code exchange → profile fetch and mapping. Only the
//! hooks of [`OAuthProvider`] differ between providers.

use std::sync::Arc;

use crate::core::{
	AccessToken, EndpointConfig, HttpTransport, OAuthProvider, ProfileRequest, ProviderConfig,
	RawPayload, SocialAuthError, User, config::dedup,
};
use crate::flow::{
	AuthorizationFlow, AuthorizationRequest, TokenExchangeFlow, format_scopes, generate_state,
	verify_state,
};

/// A configured provider
///
/// Immutable once constructed; `with_scopes` and `with_fields` return new
/// values, so a provider can be shared across tasks without locking.
pub struct SocialProvider<P> {
	provider: P,
	config: ProviderConfig,
	transport: Arc<dyn HttpTransport>,
}

impl<P: Clone> Clone for SocialProvider<P> {
	fn clone(&self) -> Self {
		Self {
			provider: self.provider.clone(),
			config: self.config.clone(),
			transport: Arc::clone(&self.transport),
		}
	}
}

impl<P: OAuthProvider> SocialProvider<P> {
	/// Creates a provider with an injected transport
	pub fn new(provider: P, config: ProviderConfig, transport: Arc<dyn HttpTransport>) -> Self {
		Self {
			provider,
			config,
			transport,
		}
	}

	/// Provider hooks
	pub fn provider(&self) -> &P {
		&self.provider
	}

	/// Provider configuration
	pub fn config(&self) -> &ProviderConfig {
		&self.config
	}

	/// Provider name
	pub fn name(&self) -> &str {
		self.provider.name()
	}

	/// Effective scopes: configured ones, else provider defaults
	pub fn scopes(&self) -> Vec<String> {
		self.config
			.scopes
			.clone()
			.unwrap_or_else(|| self.provider.default_scopes())
	}

	/// Effective profile fields: configured ones, else provider defaults
	pub fn fields(&self) -> Vec<String> {
		self.config
			.fields
			.clone()
			.unwrap_or_else(|| self.provider.default_fields())
	}

	/// Effective endpoints: configured overrides, else provider defaults
	pub fn endpoints(&self) -> EndpointConfig {
		self.config
			.endpoints
			.clone()
			.unwrap_or_else(|| self.provider.default_endpoints())
	}

	/// Whether the CSRF state round-trip is skipped
	pub fn is_stateless(&self) -> bool {
		self.provider.is_stateless() || self.config.stateless
	}

	/// Returns a provider requesting different scopes
	pub fn with_scopes<I, S>(&self, scopes: I) -> Self
	where
		P: Clone,
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut next = self.clone();
		next.config.scopes = Some(dedup(scopes));
		next
	}

	/// Returns a provider requesting different profile fields
	///
	/// The returned value uses the fields on its next profile fetch; `self`
	/// and requests already in flight on it are unaffected.
	pub fn with_fields<I, S>(&self, fields: I) -> Self
	where
		P: Clone,
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut next = self.clone();
		next.config.fields = Some(dedup(fields));
		next
	}

	/// Builds the authorization URL
	///
	/// Stateless providers never include a `state` parameter, whatever is
	/// passed. Otherwise the given state is used, or a random one is
	/// generated when none or an empty one is given. It is returned so the
	/// caller can verify it on callback.
	pub fn authorization_url(
		&self,
		state: Option<&str>,
	) -> Result<AuthorizationRequest, SocialAuthError> {
		let state = if self.is_stateless() {
			None
		} else {
			Some(
				state
					.filter(|s| !s.is_empty())
					.map_or_else(generate_state, str::to_string),
			)
		};

		let scope = format_scopes(&self.scopes(), self.provider.scope_separator());
		let endpoints = self.endpoints();
		let url = AuthorizationFlow::new(&self.config).build_url(
			&endpoints.authorization_endpoint,
			&scope,
			state.as_deref(),
		)?;

		Ok(AuthorizationRequest { url, state })
	}

	/// Verifies the state returned on callback
	///
	/// Always succeeds for stateless providers; they offer no CSRF
	/// protection through `state`.
	pub fn verify_state(
		&self,
		expected: Option<&str>,
		returned: Option<&str>,
	) -> Result<(), SocialAuthError> {
		if self.is_stateless() {
			return Ok(());
		}
		verify_state(expected, returned)
	}

	/// Exchanges an authorization code for an access token
	pub async fn access_token(&self, code: &str) -> Result<AccessToken, SocialAuthError> {
		let endpoints = self.endpoints();
		let flow = TokenExchangeFlow::new(self.transport.as_ref(), &self.config);
		let fields = flow.token_fields(code, self.provider.extra_token_fields(code));

		flow.exchange(
			&endpoints.token_endpoint,
			fields,
			self.provider.token_headers(),
			self.provider.token_format(),
		)
		.await
	}

	/// Fetches the raw profile for a token
	pub async fn user_by_token(&self, token: &AccessToken) -> Result<RawPayload, SocialAuthError> {
		let endpoints = self.endpoints();
		let fields = self.fields();

		self.provider
			.fetch_profile(ProfileRequest {
				transport: self.transport.as_ref(),
				token,
				endpoints: &endpoints,
				fields: &fields,
				config: &self.config,
			})
			.await
	}

	/// Maps a raw profile to a user
	pub fn map_user(&self, raw: RawPayload) -> Result<User, SocialAuthError> {
		self.provider.map_user(raw, &self.config)
	}

	/// Runs the whole flow for a callback code
	pub async fn user(&self, code: &str) -> Result<User, SocialAuthError> {
		let token = self.access_token(code).await?;
		self.user_from_token(token).await
	}

	/// Fetches and maps the user for an already acquired token
	pub async fn user_from_token(&self, token: AccessToken) -> Result<User, SocialAuthError> {
		let raw = self.user_by_token(&token).await?;
		let user = self.map_user(raw)?.with_origin(self.provider.name(), token);

		tracing::info!(provider = self.provider.name(), user_id = user.id(), "user resolved");

		Ok(user)
	}
}
