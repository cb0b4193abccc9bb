//! Backend tests: settings to working drivers

use hyper::Method;
use socialite_auth::{ReqwestTransport, SocialAuthBackend, SocialAuthError, SocialiteSettings};
use std::io::Write;
use std::sync::Arc;

use crate::helpers::{MockOAuth2Server, MockResponse, TestFixtures};

fn settings_toml(server: &MockOAuth2Server) -> String {
	format!(
		r#"
[providers.github]
client_id = "test_github_client_id"
client_secret = "test_github_client_secret"
redirect_uri = "http://localhost:8080/callback"

[providers.github.endpoints]
authorization_endpoint = "{base}/login/oauth/authorize"
token_endpoint = "{base}/login/oauth/access_token"
api_base_url = "{base}"

[providers.linkedin]
client_id = "test_linkedin_client_id"
client_secret = "test_linkedin_client_secret"
redirect_uri = "http://localhost:8080/callback"
locale = "en_US"
"#,
		base = server.base_url()
	)
}

#[tokio::test]
async fn test_backend_from_settings_file() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(settings_toml(&server).as_bytes()).unwrap();

	// Act
	let settings = SocialiteSettings::from_file(file.path()).unwrap();
	let backend =
		SocialAuthBackend::with_transport(settings, Arc::new(ReqwestTransport::new())).unwrap();

	// Assert
	assert_eq!(backend.providers(), vec!["github", "linkedin"]);
	assert_eq!(
		backend.driver("linkedin").unwrap().config().locale.as_deref(),
		Some("en_US")
	);
}

#[tokio::test]
async fn test_backend_driver_runs_flow() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_route(
		Method::POST,
		"/login/oauth/access_token",
		MockResponse::form(200, TestFixtures::github_token_response()),
	);
	server.set_route(
		Method::GET,
		"/user",
		MockResponse::json(200, TestFixtures::github_user(Some("octocat@example.com"))),
	);
	let settings = SocialiteSettings::from_toml(&settings_toml(&server)).unwrap();
	let backend =
		SocialAuthBackend::with_transport(settings, Arc::new(ReqwestTransport::new())).unwrap();

	// Act
	let user = backend.driver("GitHub").unwrap().user("github_code").await.unwrap();

	// Assert
	assert_eq!(user.id(), "583231");
	assert_eq!(user.provider(), Some("github"));
}

#[test]
fn test_backend_unknown_driver() {
	// Arrange
	let backend = SocialAuthBackend::new(Arc::new(ReqwestTransport::new()));

	// Act
	let result = backend.driver("orkut");

	// Assert
	assert!(matches!(result, Err(SocialAuthError::Configuration(_))));
}

#[test]
fn test_settings_reject_invalid_redirect_uri() {
	// Arrange
	let content = r#"
[providers.github]
client_id = "id"
client_secret = "secret"
redirect_uri = "not a url"
"#;

	// Act
	let result = SocialiteSettings::from_toml(content);

	// Assert
	assert!(matches!(result, Err(SocialAuthError::Configuration(msg)) if msg.contains("github")));
}
