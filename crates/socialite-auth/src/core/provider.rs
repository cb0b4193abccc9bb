//! OAuth2 provider trait

use async_trait::async_trait;

use crate::core::{
	AccessToken, EndpointConfig, HttpTransport, ProviderConfig, RawPayload, SocialAuthError, User,
};

/// Encoding of the token endpoint response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenFormat {
	/// JSON object
	#[default]
	Json,
	/// `application/x-www-form-urlencoded` body
	Form,
}

/// Everything a provider needs to fetch a profile
pub struct ProfileRequest<'a> {
	/// Injected transport
	pub transport: &'a dyn HttpTransport,
	/// Token acquired by the exchange step
	pub token: &'a AccessToken,
	/// Effective endpoints
	pub endpoints: &'a EndpointConfig,
	/// Effective profile fields
	pub fields: &'a [String],
	/// Provider configuration
	pub config: &'a ProviderConfig,
}

/// Provider-specific hooks of the authorization code flow
///
/// The flow itself lives in [`SocialProvider`](crate::SocialProvider); a
/// provider only supplies its endpoints, its profile fetch sequence and the
/// mapping of the raw payload to a [`User`].
///
/// # Example
///
/// ```ignore
/// use socialite_auth::{ProviderConfig, ReqwestTransport, SocialProvider};
/// use socialite_auth::providers::LinkedInProvider;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let config = ProviderConfig::builder(
///         "client_id",
///         "client_secret",
///         "https://example.com/callback",
///     )
///     .build()
///     .unwrap();
///
///     let linkedin = SocialProvider::new(
///         LinkedInProvider::new(),
///         config,
///         Arc::new(ReqwestTransport::new()),
///     );
///
///     let request = linkedin.authorization_url(None).unwrap();
///     // redirect to request.url, then on callback:
///     let user = linkedin.user("code").await.unwrap();
/// }
/// ```
#[async_trait]
pub trait OAuthProvider: Send + Sync {
	/// Get provider name
	fn name(&self) -> &str;

	/// Built-in endpoints, used unless the configuration overrides them
	fn default_endpoints(&self) -> EndpointConfig;

	/// Scopes requested when the configuration does not set any
	fn default_scopes(&self) -> Vec<String>;

	/// Profile fields requested when the configuration does not set any
	fn default_fields(&self) -> Vec<String> {
		Vec::new()
	}

	/// Separator used to join scopes in the authorization URL
	fn scope_separator(&self) -> &str {
		" "
	}

	/// Providers that do not support the CSRF state round-trip return `true`
	fn is_stateless(&self) -> bool {
		false
	}

	/// Encoding of the token endpoint response
	fn token_format(&self) -> TokenFormat {
		TokenFormat::Json
	}

	/// Headers sent to the token endpoint
	fn token_headers(&self) -> Vec<(String, String)> {
		vec![("Accept".to_string(), "application/json".to_string())]
	}

	/// Additional or overriding token request fields
	fn extra_token_fields(&self, _code: &str) -> Vec<(String, String)> {
		Vec::new()
	}

	/// Fetch the raw profile for an access token
	async fn fetch_profile(
		&self,
		request: ProfileRequest<'_>,
	) -> Result<RawPayload, SocialAuthError>;

	/// Map a raw profile to a user
	///
	/// Fails with `MalformedProfile` when a required field is absent.
	fn map_user(&self, raw: RawPayload, config: &ProviderConfig)
	-> Result<User, SocialAuthError>;
}
