//! Test fixtures for social login integration tests

use serde_json::{Value, json};
use socialite_auth::{EndpointConfig, ProviderConfig};

use super::mock_server::MockOAuth2Server;

pub const REDIRECT_URI: &str = "http://localhost:8080/callback";

/// Test fixture builder
pub struct TestFixtures;

impl TestFixtures {
	// ============================================================
	// LinkedIn Fixtures
	// ============================================================

	/// LinkedIn configuration pointing at the mock server
	pub fn linkedin_config(server: &MockOAuth2Server) -> ProviderConfig {
		ProviderConfig::builder(
			"test_linkedin_client_id",
			"test_linkedin_client_secret",
			REDIRECT_URI,
		)
		.endpoints(EndpointConfig::new(
			server.url("/oauth/v2/authorization"),
			server.url("/oauth/v2/accessToken"),
			server.url("/v2"),
		))
		.build()
		.unwrap()
	}

	/// LinkedIn token response
	pub fn linkedin_token_response() -> Value {
		json!({
			"access_token": "AQX_linkedin_token",
			"expires_in": 5184000
		})
	}

	/// LinkedIn `/me` response with a localized name and a profile picture
	pub fn linkedin_profile() -> Value {
		json!({
			"id": "yrZCpj2Z12",
			"firstName": {
				"localized": {"de_DE": "Ada", "en_US": "Ada"},
				"preferredLocale": {"country": "DE", "language": "de"}
			},
			"lastName": {
				"localized": {"de_DE": "Lovelace"}
			},
			"profilePicture": {
				"displayImage~": {
					"elements": [
						{"identifiers": [{"identifier": "https://media.licdn.com/dms/image/100_100.jpg"}]},
						{"identifiers": [{"identifier": "https://media.licdn.com/dms/image/800_800.jpg"}]}
					]
				}
			}
		})
	}

	/// LinkedIn `/emailAddress` response
	pub fn linkedin_email() -> Value {
		json!({
			"elements": [
				{"handle": "urn:li:emailAddress:3775708763", "handle~": {"emailAddress": "ada@example.com"}}
			]
		})
	}

	// ============================================================
	// GitHub Fixtures
	// ============================================================

	/// GitHub configuration pointing at the mock server
	pub fn github_config(server: &MockOAuth2Server) -> ProviderConfig {
		ProviderConfig::builder(
			"test_github_client_id",
			"test_github_client_secret",
			REDIRECT_URI,
		)
		.endpoints(EndpointConfig::new(
			server.url("/login/oauth/authorize"),
			server.url("/login/oauth/access_token"),
			server.base_url(),
		))
		.build()
		.unwrap()
	}

	/// GitHub token response body, form-encoded
	pub fn github_token_response() -> &'static str {
		"access_token=gho_test_token&scope=user%3Aemail&token_type=bearer"
	}

	/// GitHub `/user` response
	pub fn github_user(email: Option<&str>) -> Value {
		json!({
			"id": 583231,
			"login": "octocat",
			"name": "The Octocat",
			"email": email,
			"avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4"
		})
	}

	/// GitHub `/user/emails` response
	pub fn github_emails() -> Value {
		json!([
			{"email": "octocat@users.noreply.github.com", "primary": false, "verified": true},
			{"email": "octocat@github.com", "primary": true, "verified": true}
		])
	}
}
