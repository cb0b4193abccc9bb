//! LinkedIn OAuth2 provider
//!
//! See <https://learn.microsoft.com/linkedin/shared/authentication/authorization-code-flow>.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::{
	EndpointConfig, OAuthProvider, ProfileRequest, ProviderConfig, RawPayload, SocialAuthError,
	User,
};
use crate::flow::UserInfoClient;

const AUTHORIZATION_ENDPOINT: &str = "https://www.linkedin.com/oauth/v2/authorization";
const TOKEN_ENDPOINT: &str = "https://www.linkedin.com/oauth/v2/accessToken";
const API_BASE_URL: &str = "https://api.linkedin.com/v2";
const EMAIL_PATH: &str = "emailAddress?q=members&projection=(elements*(handle~))";

/// Locale used to pick the localized first name when none is configured
pub const DEFAULT_LOCALE: &str = "de_DE";

/// LinkedIn OAuth2 provider
///
/// Stateless: the authorization URL carries no `state`, so callers get no
/// CSRF protection from the state round-trip with this provider.
#[derive(Debug, Clone, Default)]
pub struct LinkedInProvider;

impl LinkedInProvider {
	/// Create a new LinkedIn provider
	pub fn new() -> Self {
		Self
	}

	fn headers(request: &ProfileRequest<'_>) -> Vec<(String, String)> {
		vec![
			("Content-Type".to_string(), "application/json".to_string()),
			("X-Restli-Protocol-Version".to_string(), "2.0.0".to_string()),
			("Authorization".to_string(), request.token.bearer()),
		]
	}
}

#[async_trait]
impl OAuthProvider for LinkedInProvider {
	fn name(&self) -> &str {
		"linkedin"
	}

	fn default_endpoints(&self) -> EndpointConfig {
		EndpointConfig::new(AUTHORIZATION_ENDPOINT, TOKEN_ENDPOINT, API_BASE_URL)
	}

	fn default_scopes(&self) -> Vec<String> {
		vec!["r_basicprofile".to_string(), "r_emailaddress".to_string()]
	}

	fn default_fields(&self) -> Vec<String> {
		vec![
			"id".to_string(),
			"firstName".to_string(),
			"lastName".to_string(),
			"profilePicture(displayImage~:playableStreams)".to_string(),
		]
	}

	fn is_stateless(&self) -> bool {
		true
	}

	async fn fetch_profile(
		&self,
		request: ProfileRequest<'_>,
	) -> Result<RawPayload, SocialAuthError> {
		let client = UserInfoClient::new(request.transport);

		let profile_url = if request.fields.is_empty() {
			request.endpoints.api_url("me")
		} else {
			format!(
				"{}?projection=({})",
				request.endpoints.api_url("me"),
				request.fields.join(",")
			)
		};
		let profile = client
			.get_json(&profile_url, Self::headers(&request))
			.await?;

		let email = client
			.get_json(
				&request.endpoints.api_url(EMAIL_PATH),
				Self::headers(&request),
			)
			.await?;

		Ok(profile.merge(email))
	}

	fn map_user(&self, raw: RawPayload, config: &ProviderConfig) -> Result<User, SocialAuthError> {
		let locale = config.locale.as_deref().unwrap_or(DEFAULT_LOCALE);

		let id = raw.require_id(&["id"])?;
		let email = raw
			.require_str(&["elements", "0", "handle~", "emailAddress"])?
			.to_string();
		let name = raw
			.str_at(&["firstName", "localized", locale])
			.map(str::to_string);
		let avatar = largest_picture(&raw);

		User::builder(id)
			.nickname(None)
			.name(name)
			.email(Some(email))
			.avatar(avatar.clone())
			.avatar_original(avatar)
			.raw(raw)
			.build()
	}
}

/// URL of the last (largest) display image, when the projection included it
fn largest_picture(raw: &RawPayload) -> Option<String> {
	raw.array_at(&["profilePicture", "displayImage~", "elements"])?
		.iter()
		.rev()
		.find_map(|element| {
			element
				.pointer("/identifiers/0/identifier")
				.and_then(Value::as_str)
		})
		.map(str::to_string)
}
