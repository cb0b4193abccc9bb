//! Social authentication error types

use std::fmt;

use thiserror::Error;

/// Underlying reason a remote step failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
	/// The transport could not complete the request
	Transport(String),

	/// The provider answered with a non-2xx status
	Status {
		/// HTTP status code
		status: u16,
		/// Response body, as returned by the provider
		body: String,
	},

	/// The response body could not be decoded
	Decode(String),
}

impl fmt::Display for FailureCause {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FailureCause::Transport(msg) => write!(f, "transport error: {}", msg),
			FailureCause::Status { status, body } => {
				write!(f, "unexpected status {}: {}", status, body)
			}
			FailureCause::Decode(msg) => write!(f, "undecodable body: {}", msg),
		}
	}
}

/// Social authentication errors
///
/// Each variant names the step of the authorization code flow that failed.
/// Token errors usually mean the authorization step has to be restarted,
/// while profile errors can be retried with the same token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialAuthError {
	/// Exchanging the authorization code for an access token failed
	#[error("Token exchange error: {0}")]
	TokenExchange(FailureCause),

	/// Fetching the user profile with an access token failed
	#[error("Profile fetch error at {endpoint}: {cause}")]
	ProfileFetch {
		/// Endpoint that failed
		endpoint: String,
		/// Underlying cause
		cause: FailureCause,
	},

	/// A required field was missing from an otherwise successful profile fetch
	#[error("Malformed profile: missing required field `{field}`")]
	MalformedProfile {
		/// Dotted path of the missing field
		field: String,
	},

	/// State parameter validation failed (CSRF protection)
	#[error("State validation failed: {0}")]
	StateValidation(String),

	/// Configuration error
	#[error("Configuration error: {0}")]
	Configuration(String),
}

impl SocialAuthError {
	/// Builds a `MalformedProfile` error for the given field path
	pub fn malformed(field: impl Into<String>) -> Self {
		SocialAuthError::MalformedProfile {
			field: field.into(),
		}
	}

	/// Builds a `ProfileFetch` error for the given endpoint
	pub fn profile_fetch(endpoint: impl Into<String>, cause: FailureCause) -> Self {
		SocialAuthError::ProfileFetch {
			endpoint: endpoint.into(),
			cause,
		}
	}

	/// Name of the flow step this error belongs to
	pub fn step(&self) -> &'static str {
		match self {
			SocialAuthError::TokenExchange(_) => "token_exchange",
			SocialAuthError::ProfileFetch { .. } => "profile_fetch",
			SocialAuthError::MalformedProfile { .. } => "map_user",
			SocialAuthError::StateValidation(_) => "state_validation",
			SocialAuthError::Configuration(_) => "configuration",
		}
	}
}

/// Conversion from toml::de::Error
impl From<toml::de::Error> for SocialAuthError {
	fn from(error: toml::de::Error) -> Self {
		SocialAuthError::Configuration(error.to_string())
	}
}

/// Conversion from url::ParseError
impl From<url::ParseError> for SocialAuthError {
	fn from(error: url::ParseError) -> Self {
		SocialAuthError::Configuration(format!("Invalid URL: {}", error))
	}
}
