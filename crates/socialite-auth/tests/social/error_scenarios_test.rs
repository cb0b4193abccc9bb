//! Error scenario tests

use hyper::Method;
use rstest::*;
use serde_json::json;
use socialite_auth::{
	FailureCause, LinkedInProvider, ReqwestTransport, SocialAuthError, SocialProvider,
};
use std::sync::Arc;

use crate::helpers::{MockOAuth2Server, MockResponse, TestFixtures};

fn linkedin(server: &MockOAuth2Server) -> SocialProvider<LinkedInProvider> {
	SocialProvider::new(
		LinkedInProvider::new(),
		TestFixtures::linkedin_config(server),
		Arc::new(ReqwestTransport::new()),
	)
}

#[rstest]
#[case(400, "invalid_grant")]
#[case(401, "unauthorized")]
#[case(500, "internal error")]
#[tokio::test]
async fn test_error_status_on_token_exchange(#[case] status: u16, #[case] body: &str) {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_route(
		Method::POST,
		"/oauth/v2/accessToken",
		MockResponse::text(status, body),
	);
	let provider = linkedin(&server);

	// Act
	let result = provider.user("linkedin_code").await;

	// Assert
	assert_eq!(
		result.unwrap_err(),
		SocialAuthError::TokenExchange(FailureCause::Status {
			status,
			body: body.to_string(),
		})
	);
	assert!(server.requests_to("/v2/me").is_empty());
	assert!(server.requests_to("/v2/emailAddress").is_empty());
}

#[tokio::test]
async fn test_error_invalid_json_token_response() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_route(
		Method::POST,
		"/oauth/v2/accessToken",
		MockResponse::text(200, "{invalid json!!! not valid"),
	);
	let provider = linkedin(&server);

	// Act
	let result = provider.access_token("linkedin_code").await;

	// Assert
	assert!(matches!(
		result,
		Err(SocialAuthError::TokenExchange(FailureCause::Decode(_)))
	));
}

#[tokio::test]
async fn test_error_invalid_json_token_response_stops_flow() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_route(
		Method::POST,
		"/oauth/v2/accessToken",
		MockResponse::text(200, "{invalid"),
	);
	server.set_route(
		Method::GET,
		"/v2/me",
		MockResponse::json(200, TestFixtures::linkedin_profile()),
	);
	server.set_route(
		Method::GET,
		"/v2/emailAddress",
		MockResponse::json(200, TestFixtures::linkedin_email()),
	);
	let provider = linkedin(&server);

	// Act
	let result = provider.user("linkedin_code").await;

	// Assert
	assert!(matches!(
		result,
		Err(SocialAuthError::TokenExchange(FailureCause::Decode(_)))
	));
	assert_eq!(server.requests_to("/oauth/v2/accessToken").len(), 1);
	assert!(server.requests_to("/v2/me").is_empty());
	assert!(server.requests_to("/v2/emailAddress").is_empty());
}

#[tokio::test]
async fn test_error_token_response_without_access_token() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_route(
		Method::POST,
		"/oauth/v2/accessToken",
		MockResponse::json(
			200,
			json!({"error": "invalid_request", "error_description": "code expired"}),
		),
	);
	let provider = linkedin(&server);

	// Act
	let result = provider.access_token("linkedin_code").await;

	// Assert
	assert!(matches!(
		result,
		Err(SocialAuthError::TokenExchange(FailureCause::Decode(_)))
	));
}

#[tokio::test]
async fn test_error_profile_endpoint_unauthorized() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_route(
		Method::POST,
		"/oauth/v2/accessToken",
		MockResponse::json(200, TestFixtures::linkedin_token_response()),
	);
	server.set_route(Method::GET, "/v2/me", MockResponse::text(401, "expired"));
	let provider = linkedin(&server);

	// Act
	let error = provider.user("linkedin_code").await.unwrap_err();

	// Assert
	match error {
		SocialAuthError::ProfileFetch { endpoint, cause } => {
			assert!(endpoint.starts_with(&server.url("/v2/me")));
			assert_eq!(
				cause,
				FailureCause::Status {
					status: 401,
					body: "expired".to_string(),
				}
			);
		}
		other => panic!("Expected ProfileFetch, got {:?}", other),
	}
	assert!(server.requests_to("/v2/emailAddress").is_empty());
}

#[tokio::test]
async fn test_error_missing_email_is_malformed_profile() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	server.set_route(
		Method::POST,
		"/oauth/v2/accessToken",
		MockResponse::json(200, TestFixtures::linkedin_token_response()),
	);
	server.set_route(
		Method::GET,
		"/v2/me",
		MockResponse::json(200, TestFixtures::linkedin_profile()),
	);
	server.set_route(
		Method::GET,
		"/v2/emailAddress",
		MockResponse::json(200, json!({"elements": []})),
	);
	let provider = linkedin(&server);

	// Act
	let error = provider.user("linkedin_code").await.unwrap_err();

	// Assert
	assert_eq!(
		error,
		SocialAuthError::MalformedProfile {
			field: "elements.0.handle~.emailAddress".to_string(),
		}
	);
	assert_eq!(error.step(), "map_user");
}

#[tokio::test]
async fn test_error_connection_refused() {
	// Arrange
	let server = MockOAuth2Server::new().await;
	let mut config = TestFixtures::linkedin_config(&server);
	if let Some(endpoints) = config.endpoints.as_mut() {
		endpoints.token_endpoint = "http://127.0.0.1:1/oauth/v2/accessToken".to_string();
	}
	let provider = SocialProvider::new(
		LinkedInProvider::new(),
		config,
		Arc::new(ReqwestTransport::new()),
	);

	// Act
	let result = provider.access_token("linkedin_code").await;

	// Assert
	assert!(matches!(
		result,
		Err(SocialAuthError::TokenExchange(FailureCause::Transport(_)))
	));
}
