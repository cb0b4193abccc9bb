//! Raw provider payloads
//!
//! Provider responses are kept as a JSON tree. Lookups never panic: a missing
//! key, an out-of-range index or a type mismatch yields `None`, and the
//! `require_*` helpers turn that into [`SocialAuthError::MalformedProfile`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::SocialAuthError;

/// Raw profile payload returned by a provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPayload(Value);

impl RawPayload {
	/// Wraps a JSON value
	pub fn new(value: Value) -> Self {
		Self(value)
	}

	/// Parses a payload from a JSON body
	pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
		serde_json::from_slice(body).map(Self)
	}

	/// Returns the underlying JSON value
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	/// Consumes the payload and returns the JSON value
	pub fn into_value(self) -> Value {
		self.0
	}

	/// Returns the top-level object, if the payload is one
	pub fn as_object(&self) -> Option<&Map<String, Value>> {
		self.0.as_object()
	}

	/// Walks the payload along `path`
	///
	/// Each segment is an object key, or an array index when the current node
	/// is an array.
	pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
		path.iter().try_fold(&self.0, |node, segment| match node {
			Value::Object(map) => map.get(*segment),
			Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
			_ => None,
		})
	}

	/// Returns the string at `path`
	pub fn str_at(&self, path: &[&str]) -> Option<&str> {
		self.lookup(path).and_then(Value::as_str)
	}

	/// Returns the value at `path` as an identifier
	///
	/// Numeric identifiers are rendered as their decimal representation.
	pub fn id_at(&self, path: &[&str]) -> Option<String> {
		match self.lookup(path)? {
			Value::String(s) if !s.is_empty() => Some(s.clone()),
			Value::Number(n) => Some(n.to_string()),
			_ => None,
		}
	}

	/// Returns the array at `path`
	pub fn array_at(&self, path: &[&str]) -> Option<&Vec<Value>> {
		self.lookup(path).and_then(Value::as_array)
	}

	/// Returns the string at `path`, or a `MalformedProfile` error naming it
	pub fn require_str(&self, path: &[&str]) -> Result<&str, SocialAuthError> {
		self.str_at(path)
			.ok_or_else(|| SocialAuthError::malformed(path.join(".")))
	}

	/// Returns the identifier at `path`, or a `MalformedProfile` error naming it
	pub fn require_id(&self, path: &[&str]) -> Result<String, SocialAuthError> {
		self.id_at(path)
			.ok_or_else(|| SocialAuthError::malformed(path.join(".")))
	}

	/// Shallow merge of two object payloads; keys from `other` win
	///
	/// A non-object side is replaced by the other side.
	pub fn merge(self, other: RawPayload) -> RawPayload {
		match (self.0, other.0) {
			(Value::Object(mut left), Value::Object(right)) => {
				left.extend(right);
				RawPayload(Value::Object(left))
			}
			(left, Value::Null) => RawPayload(left),
			(_, right) => RawPayload(right),
		}
	}

	/// Inserts a top-level key, turning a non-object payload into an object
	pub fn with_entry(self, key: impl Into<String>, value: Value) -> RawPayload {
		let mut map = match self.0 {
			Value::Object(map) => map,
			_ => Map::new(),
		};
		map.insert(key.into(), value);
		RawPayload(Value::Object(map))
	}
}

impl From<Value> for RawPayload {
	fn from(value: Value) -> Self {
		Self(value)
	}
}
