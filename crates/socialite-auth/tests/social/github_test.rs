//! GitHub provider tests against a mock server

use hyper::Method;
use socialite_auth::{GitHubProvider, ReqwestTransport, SocialAuthError, SocialProvider};
use std::sync::Arc;

use crate::helpers::{
	MockOAuth2Server, MockResponse, TestFixtures, assert_authorization_url_valid,
	assert_token_request_valid,
};

async fn github_server(email: Option<&str>) -> MockOAuth2Server {
	let server = MockOAuth2Server::new().await;
	server.set_route(
		Method::POST,
		"/login/oauth/access_token",
		MockResponse::form(200, TestFixtures::github_token_response()),
	);
	server.set_route(
		Method::GET,
		"/user",
		MockResponse::json(200, TestFixtures::github_user(email)),
	);
	server.set_route(
		Method::GET,
		"/user/emails",
		MockResponse::json(200, TestFixtures::github_emails()),
	);
	server
}

fn github(server: &MockOAuth2Server) -> SocialProvider<GitHubProvider> {
	SocialProvider::new(
		GitHubProvider::new(),
		TestFixtures::github_config(server),
		Arc::new(ReqwestTransport::new()),
	)
}

#[tokio::test]
async fn test_github_authorization_url_and_state_round_trip() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let provider = github(&server);

	// Act
	let request = provider.authorization_url(None).unwrap();
	let state = request.state.clone().unwrap();

	// Assert
	assert_authorization_url_valid(
		&request.url,
		&server.url("/login/oauth/authorize"),
		"test_github_client_id",
		Some(&state),
	);
	assert!(provider.verify_state(Some(&state), Some(&state)).is_ok());
	assert!(matches!(
		provider.verify_state(Some(&state), Some("forged")),
		Err(SocialAuthError::StateValidation(_))
	));
}

#[tokio::test]
async fn test_github_full_flow_with_public_email() {
	// Arrange
	let server = github_server(Some("octocat@example.com")).await;
	let provider = github(&server);

	// Act
	let user = provider.user("github_code").await.unwrap();

	// Assert
	assert_eq!(user.id(), "583231");
	assert_eq!(user.nickname(), Some("octocat"));
	assert_eq!(user.name(), Some("The Octocat"));
	assert_eq!(user.email(), Some("octocat@example.com"));
	assert_eq!(
		user.avatar(),
		Some("https://avatars.githubusercontent.com/u/583231?v=4")
	);
	assert_eq!(user.provider(), Some("github"));
	assert_eq!(user.token().map(|token| token.token()), Some("gho_test_token"));
	assert!(server.requests_to("/user/emails").is_empty());

	let token_requests = server.requests_to("/login/oauth/access_token");
	assert_eq!(token_requests.len(), 1);
	assert_token_request_valid(&token_requests[0], "github_code");
}

#[tokio::test]
async fn test_github_private_email_uses_primary_address() {
	// Arrange
	let server = github_server(None).await;
	let provider = github(&server);

	// Act
	let user = provider.user("github_code").await.unwrap();

	// Assert
	assert_eq!(user.email(), Some("octocat@github.com"));

	let email_requests = server.requests_to("/user/emails");
	assert_eq!(email_requests.len(), 1);
	assert_eq!(
		email_requests[0].header("Authorization"),
		Some("Bearer gho_test_token")
	);
	assert!(email_requests[0].header("User-Agent").is_some());
}
