//! Normalized user identity

use serde::{Deserialize, Serialize};

use crate::core::{AccessToken, RawPayload, SocialAuthError};

/// User identity normalized across providers
///
/// Only constructed through [`UserBuilder`], after every remote call of the
/// flow has succeeded. Downstream code can rely on the same shape no matter
/// which provider produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
	id: String,
	nickname: Option<String>,
	name: Option<String>,
	email: Option<String>,
	avatar: Option<String>,
	avatar_original: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	provider: Option<String>,
	#[serde(default)]
	raw: RawPayload,
	#[serde(skip)]
	token: Option<AccessToken>,
}

impl User {
	/// Starts building a user with the given provider-scoped identifier
	pub fn builder(id: impl Into<String>) -> UserBuilder {
		UserBuilder {
			id: id.into(),
			nickname: None,
			name: None,
			email: None,
			avatar: None,
			avatar_original: None,
			provider: None,
			raw: RawPayload::default(),
			token: None,
		}
	}

	/// Provider-scoped identifier
	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn nickname(&self) -> Option<&str> {
		self.nickname.as_deref()
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn email(&self) -> Option<&str> {
		self.email.as_deref()
	}

	pub fn avatar(&self) -> Option<&str> {
		self.avatar.as_deref()
	}

	pub fn avatar_original(&self) -> Option<&str> {
		self.avatar_original.as_deref()
	}

	/// Name of the provider that produced this user
	pub fn provider(&self) -> Option<&str> {
		self.provider.as_deref()
	}

	/// Provider payload the user was mapped from
	pub fn raw(&self) -> &RawPayload {
		&self.raw
	}

	/// Access token used to fetch the profile
	pub fn token(&self) -> Option<&AccessToken> {
		self.token.as_ref()
	}

	/// Returns a copy carrying the provider name and the token
	pub(crate) fn with_origin(mut self, provider: &str, token: AccessToken) -> Self {
		self.provider = Some(provider.to_string());
		self.token = Some(token);
		self
	}
}

/// Serialized form of [`User`], checked through [`UserBuilder::build`]
#[derive(Deserialize)]
struct UserRecord {
	id: String,
	#[serde(default)]
	nickname: Option<String>,
	#[serde(default)]
	name: Option<String>,
	#[serde(default)]
	email: Option<String>,
	#[serde(default)]
	avatar: Option<String>,
	#[serde(default)]
	avatar_original: Option<String>,
	#[serde(default)]
	provider: Option<String>,
	#[serde(default)]
	raw: RawPayload,
}

impl TryFrom<UserRecord> for User {
	type Error = SocialAuthError;

	fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
		let mut builder = User::builder(record.id)
			.nickname(record.nickname)
			.name(record.name)
			.email(record.email)
			.avatar(record.avatar)
			.avatar_original(record.avatar_original)
			.raw(record.raw);
		if let Some(provider) = record.provider {
			builder = builder.provider(provider);
		}
		builder.build()
	}
}

/// Builder for [`User`]
#[derive(Debug, Clone)]
pub struct UserBuilder {
	id: String,
	nickname: Option<String>,
	name: Option<String>,
	email: Option<String>,
	avatar: Option<String>,
	avatar_original: Option<String>,
	provider: Option<String>,
	raw: RawPayload,
	token: Option<AccessToken>,
}

impl UserBuilder {
	pub fn nickname(mut self, nickname: Option<String>) -> Self {
		self.nickname = nickname;
		self
	}

	pub fn name(mut self, name: Option<String>) -> Self {
		self.name = name;
		self
	}

	pub fn email(mut self, email: Option<String>) -> Self {
		self.email = email;
		self
	}

	pub fn avatar(mut self, avatar: Option<String>) -> Self {
		self.avatar = avatar;
		self
	}

	pub fn avatar_original(mut self, avatar_original: Option<String>) -> Self {
		self.avatar_original = avatar_original;
		self
	}

	pub fn provider(mut self, provider: impl Into<String>) -> Self {
		self.provider = Some(provider.into());
		self
	}

	pub fn raw(mut self, raw: RawPayload) -> Self {
		self.raw = raw;
		self
	}

	pub fn token(mut self, token: AccessToken) -> Self {
		self.token = Some(token);
		self
	}

	/// Finishes the user
	///
	/// Fails with `MalformedProfile` when the identifier is empty.
	pub fn build(self) -> Result<User, SocialAuthError> {
		if self.id.is_empty() {
			return Err(SocialAuthError::malformed("id"));
		}

		Ok(User {
			id: self.id,
			nickname: self.nickname,
			name: self.name,
			email: self.email,
			avatar: self.avatar,
			avatar_original: self.avatar_original,
			provider: self.provider,
			raw: self.raw,
			token: self.token,
		})
	}
}
