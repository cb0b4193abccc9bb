//! Authorization code for access token exchange

use crate::core::{
	AccessToken, FailureCause, HttpRequest, HttpTransport, ProviderConfig, SocialAuthError,
	TokenFormat,
};

/// Token exchange flow handler
pub struct TokenExchangeFlow<'a> {
	transport: &'a dyn HttpTransport,
	config: &'a ProviderConfig,
}

impl<'a> TokenExchangeFlow<'a> {
	/// Creates a new token exchange flow
	pub fn new(transport: &'a dyn HttpTransport, config: &'a ProviderConfig) -> Self {
		Self { transport, config }
	}

	/// Form fields of the token request
	///
	/// The default set is `client_id`, `client_secret`, `redirect_uri`,
	/// `code` and `grant_type=authorization_code`. Entries of `extra`
	/// replace a default field of the same name or are appended.
	pub fn token_fields(&self, code: &str, extra: Vec<(String, String)>) -> Vec<(String, String)> {
		let mut fields = vec![
			("client_id".to_string(), self.config.client_id.clone()),
			("client_secret".to_string(), self.config.client_secret.clone()),
			("redirect_uri".to_string(), self.config.redirect_uri.clone()),
			("code".to_string(), code.to_string()),
			("grant_type".to_string(), "authorization_code".to_string()),
		];

		for (key, value) in extra {
			match fields.iter_mut().find(|(name, _)| *name == key) {
				Some(existing) => existing.1 = value,
				None => fields.push((key, value)),
			}
		}

		fields
	}

	/// Exchanges an authorization code for an access token
	///
	/// Issues exactly one POST to `token_endpoint`.
	///
	/// # Arguments
	///
	/// * `token_endpoint` - The token endpoint URL
	/// * `fields` - Form fields, see [`token_fields`](Self::token_fields)
	/// * `headers` - Request headers
	/// * `format` - Encoding of the response body
	pub async fn exchange(
		&self,
		token_endpoint: &str,
		fields: Vec<(String, String)>,
		headers: Vec<(String, String)>,
		format: TokenFormat,
	) -> Result<AccessToken, SocialAuthError> {
		tracing::debug!(endpoint = token_endpoint, "exchanging authorization code");

		let request = HttpRequest::post_form(token_endpoint, fields).headers(headers);

		let response = self.transport.send(request).await.map_err(|e| {
			tracing::warn!(endpoint = token_endpoint, error = %e, "token request failed");
			SocialAuthError::TokenExchange(FailureCause::Transport(e.to_string()))
		})?;

		if !response.is_success() {
			tracing::warn!(
				endpoint = token_endpoint,
				status = response.status,
				"token endpoint returned an error status"
			);
			return Err(SocialAuthError::TokenExchange(FailureCause::Status {
				status: response.status,
				body: response.text(),
			}));
		}

		match format {
			TokenFormat::Json => AccessToken::from_json(&response.body),
			TokenFormat::Form => AccessToken::from_query_string(&response.body),
		}
	}
}
