//! Authorization URL construction
//!
//! Pure URL building; no network activity.

use url::Url;

use crate::core::config::RESERVED_PARAMETERS;
use crate::core::{ProviderConfig, SocialAuthError};

/// Result of building an authorization URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
	/// URL the end user is redirected to
	pub url: String,

	/// State embedded in the URL; `None` for stateless providers
	///
	/// Callers keep it (for example in their session) and hand it to
	/// [`verify_state`](crate::flow::verify_state) on callback.
	pub state: Option<String>,
}

/// Authorization URL builder for one provider configuration
pub struct AuthorizationFlow<'a> {
	config: &'a ProviderConfig,
}

impl<'a> AuthorizationFlow<'a> {
	/// Creates a builder over a provider configuration
	pub fn new(config: &'a ProviderConfig) -> Self {
		Self { config }
	}

	/// Builds the authorization URL
	///
	/// Query parameters are appended in a fixed order: `client_id`,
	/// `redirect_uri`, `scope`, `response_type`, then `state` when given,
	/// then the configured extra parameters sorted by key, skipping any
	/// that would shadow the ones above. Spaces are
	/// encoded as `+`.
	///
	/// # Arguments
	///
	/// * `endpoint` - Authorization endpoint URL
	/// * `scope` - Already joined scope string
	/// * `state` - CSRF protection token, omitted when `None`
	pub fn build_url(
		&self,
		endpoint: &str,
		scope: &str,
		state: Option<&str>,
	) -> Result<String, SocialAuthError> {
		let mut url = Url::parse(endpoint).map_err(|e| {
			SocialAuthError::Configuration(format!(
				"Invalid authorization endpoint `{}`: {}",
				endpoint, e
			))
		})?;

		{
			let mut query = url.query_pairs_mut();
			query
				.append_pair("client_id", &self.config.client_id)
				.append_pair("redirect_uri", &self.config.redirect_uri)
				.append_pair("scope", scope)
				.append_pair("response_type", "code");

			if let Some(state) = state {
				query.append_pair("state", state);
			}

			for (key, value) in &self.config.parameters {
				if !RESERVED_PARAMETERS.contains(&key.as_str()) {
					query.append_pair(key, value);
				}
			}
		}

		Ok(url.into())
	}
}

/// Joins scopes with the provider separator
pub fn format_scopes(scopes: &[String], separator: &str) -> String {
	scopes.join(separator)
}
