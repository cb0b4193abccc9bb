//! GitHub OAuth2 provider

use async_trait::async_trait;
use serde_json::Value;

use crate::core::{
	EndpointConfig, OAuthProvider, ProfileRequest, ProviderConfig, RawPayload, SocialAuthError,
	TokenFormat, User,
};
use crate::flow::UserInfoClient;

const AUTHORIZATION_ENDPOINT: &str = "https://github.com/login/oauth/authorize";
const TOKEN_ENDPOINT: &str = "https://github.com/login/oauth/access_token";
const API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("socialite/", env!("CARGO_PKG_VERSION"));

/// GitHub OAuth2 provider
///
/// The token endpoint answers with a form-encoded body. Users without a
/// public email get the primary address from `/user/emails`.
#[derive(Debug, Clone, Default)]
pub struct GitHubProvider;

impl GitHubProvider {
	/// Create a new GitHub provider
	pub fn new() -> Self {
		Self
	}

	fn headers(request: &ProfileRequest<'_>) -> Vec<(String, String)> {
		vec![
			("Accept".to_string(), "application/vnd.github+json".to_string()),
			("Authorization".to_string(), request.token.bearer()),
			("User-Agent".to_string(), USER_AGENT.to_string()),
		]
	}
}

#[async_trait]
impl OAuthProvider for GitHubProvider {
	fn name(&self) -> &str {
		"github"
	}

	fn default_endpoints(&self) -> EndpointConfig {
		EndpointConfig::new(AUTHORIZATION_ENDPOINT, TOKEN_ENDPOINT, API_BASE_URL)
	}

	fn default_scopes(&self) -> Vec<String> {
		vec!["user:email".to_string()]
	}

	fn token_format(&self) -> TokenFormat {
		TokenFormat::Form
	}

	fn token_headers(&self) -> Vec<(String, String)> {
		Vec::new()
	}

	async fn fetch_profile(
		&self,
		request: ProfileRequest<'_>,
	) -> Result<RawPayload, SocialAuthError> {
		let client = UserInfoClient::new(request.transport);

		let user = client
			.get_json(&request.endpoints.api_url("user"), Self::headers(&request))
			.await?;

		if user.str_at(&["email"]).is_some() {
			return Ok(user);
		}

		let emails = client
			.get_json(
				&request.endpoints.api_url("user/emails"),
				Self::headers(&request),
			)
			.await?;

		match primary_email(&emails) {
			Some(email) => Ok(user.with_entry("email", Value::String(email))),
			None => Ok(user),
		}
	}

	fn map_user(&self, raw: RawPayload, _config: &ProviderConfig) -> Result<User, SocialAuthError> {
		let id = raw.require_id(&["id"])?;
		let owned = |path: &[&str]| raw.str_at(path).map(str::to_string);

		let avatar = owned(&["avatar_url"]);
		let builder = User::builder(id)
			.nickname(owned(&["login"]))
			.name(owned(&["name"]))
			.email(owned(&["email"]))
			.avatar(avatar.clone())
			.avatar_original(avatar);

		builder.raw(raw).build()
	}
}

/// Primary address from the `/user/emails` listing, else the first one
fn primary_email(emails: &RawPayload) -> Option<String> {
	let entries = emails.as_value().as_array()?;
	let address = |entry: &Value| entry.get("email").and_then(Value::as_str).map(str::to_string);

	entries
		.iter()
		.find(|entry| entry.get("primary").and_then(Value::as_bool) == Some(true))
		.and_then(address)
		.or_else(|| entries.first().and_then(address))
}
