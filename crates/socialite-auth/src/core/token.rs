//! Access token value type

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{FailureCause, SocialAuthError};

/// Access token returned by a token endpoint
///
/// Holds the opaque token string plus every other field of the token
/// response (`expires_in`, `refresh_token`, `scope`, ...) exactly as the
/// provider sent it.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AccessToken {
	#[serde(rename = "access_token")]
	token: String,

	#[serde(flatten)]
	extra: Map<String, Value>,
}

impl AccessToken {
	/// Creates a token without auxiliary fields
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			token: token.into(),
			extra: Map::new(),
		}
	}

	/// Builds a token from a decoded token response object
	///
	/// Fails when `access_token` is missing or empty. A provider error
	/// payload (`error`, `error_description`) is reported in the message.
	pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self, SocialAuthError> {
		match fields.remove("access_token") {
			Some(Value::String(token)) if !token.is_empty() => Ok(Self {
				token,
				extra: fields,
			}),
			_ => Err(SocialAuthError::TokenExchange(FailureCause::Decode(
				describe_missing_token(&fields),
			))),
		}
	}

	/// Parses a JSON token response body
	pub fn from_json(body: &[u8]) -> Result<Self, SocialAuthError> {
		let value: Value = serde_json::from_slice(body)
			.map_err(|e| SocialAuthError::TokenExchange(FailureCause::Decode(e.to_string())))?;

		match value {
			Value::Object(fields) => Self::from_fields(fields),
			other => Err(SocialAuthError::TokenExchange(FailureCause::Decode(
				format!("expected a JSON object, got {}", json_kind(&other)),
			))),
		}
	}

	/// Parses a form-encoded (query string) token response body
	pub fn from_query_string(body: &[u8]) -> Result<Self, SocialAuthError> {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
			.map_err(|e| SocialAuthError::TokenExchange(FailureCause::Decode(e.to_string())))?;

		let fields = pairs
			.into_iter()
			.map(|(key, value)| (key, Value::String(value)))
			.collect();

		Self::from_fields(fields)
	}

	/// The token string
	pub fn token(&self) -> &str {
		&self.token
	}

	/// Value for the `Authorization` header
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.token)
	}

	/// Auxiliary field by name
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.extra.get(key)
	}

	/// All auxiliary fields
	pub fn extra(&self) -> &Map<String, Value> {
		&self.extra
	}

	/// Lifetime in seconds, when the provider reported one
	///
	/// Form-encoded responses carry it as a string, so both shapes are
	/// accepted.
	pub fn expires_in(&self) -> Option<u64> {
		match self.extra.get("expires_in")? {
			Value::Number(n) => n.as_u64(),
			Value::String(s) => s.parse().ok(),
			_ => None,
		}
	}

	/// Refresh token, when issued
	pub fn refresh_token(&self) -> Option<&str> {
		self.extra.get("refresh_token").and_then(Value::as_str)
	}

	/// Granted scope, when reported
	pub fn scope(&self) -> Option<&str> {
		self.extra.get("scope").and_then(Value::as_str)
	}

	/// Token type, when reported
	pub fn token_type(&self) -> Option<&str> {
		self.extra.get("token_type").and_then(Value::as_str)
	}
}

impl TryFrom<Map<String, Value>> for AccessToken {
	type Error = SocialAuthError;

	fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
		Self::from_fields(fields)
	}
}

impl fmt::Debug for AccessToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AccessToken")
			.field("token", &"[redacted]")
			.field("extra", &self.extra.keys().collect::<Vec<_>>())
			.finish()
	}
}

fn describe_missing_token(fields: &Map<String, Value>) -> String {
	match fields.get("error").and_then(Value::as_str) {
		Some(error) => match fields.get("error_description").and_then(Value::as_str) {
			Some(description) => format!("provider error `{}`: {}", error, description),
			None => format!("provider error `{}`", error),
		},
		None => "response does not contain `access_token`".to_string(),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
