//! Provider configuration types

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::core::SocialAuthError;

/// Provider configuration
///
/// Supplied once when a provider is constructed and never mutated
/// afterwards. Use [`ProviderConfig::builder`] to create a validated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// OAuth2 client ID
	pub client_id: String,

	/// OAuth2 client secret
	pub client_secret: String,

	/// Redirect URI registered with the provider
	pub redirect_uri: String,

	/// Requested scopes; the provider defaults apply when unset
	#[serde(
		default,
		deserialize_with = "deserialize_dedup",
		skip_serializing_if = "Option::is_none"
	)]
	pub scopes: Option<Vec<String>>,

	/// Requested profile fields; the provider defaults apply when unset
	#[serde(
		default,
		deserialize_with = "deserialize_dedup",
		skip_serializing_if = "Option::is_none"
	)]
	pub fields: Option<Vec<String>>,

	/// Skip the CSRF state round-trip even if the provider supports it
	#[serde(default)]
	pub stateless: bool,

	/// Extra query parameters appended to the authorization URL
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub parameters: BTreeMap<String, String>,

	/// Preferred locale for localized profile values
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,

	/// Endpoint overrides (proxies, test servers)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub endpoints: Option<EndpointConfig>,
}

/// Query parameters set by the authorization flow itself
pub const RESERVED_PARAMETERS: [&str; 5] =
	["client_id", "redirect_uri", "scope", "response_type", "state"];

/// OAuth2 endpoint URLs of a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
	/// Authorization endpoint URL
	pub authorization_endpoint: String,

	/// Token endpoint URL
	pub token_endpoint: String,

	/// Base URL of the profile API
	pub api_base_url: String,
}

impl EndpointConfig {
	pub fn new(
		authorization_endpoint: impl Into<String>,
		token_endpoint: impl Into<String>,
		api_base_url: impl Into<String>,
	) -> Self {
		Self {
			authorization_endpoint: authorization_endpoint.into(),
			token_endpoint: token_endpoint.into(),
			api_base_url: api_base_url.into(),
		}
	}

	/// Joins a path onto the API base URL
	pub fn api_url(&self, path: &str) -> String {
		format!(
			"{}/{}",
			self.api_base_url.trim_end_matches('/'),
			path.trim_start_matches('/')
		)
	}

	fn validate(&self) -> Result<(), SocialAuthError> {
		for (name, value) in [
			("authorization_endpoint", &self.authorization_endpoint),
			("token_endpoint", &self.token_endpoint),
			("api_base_url", &self.api_base_url),
		] {
			Url::parse(value).map_err(|e| {
				SocialAuthError::Configuration(format!("Invalid {}: {}", name, e))
			})?;
		}
		Ok(())
	}
}

impl ProviderConfig {
	/// Starts a builder with the required credentials
	pub fn builder(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> ProviderConfigBuilder {
		ProviderConfigBuilder {
			config: ProviderConfig {
				client_id: client_id.into(),
				client_secret: client_secret.into(),
				redirect_uri: redirect_uri.into(),
				scopes: None,
				fields: None,
				stateless: false,
				parameters: BTreeMap::new(),
				locale: None,
				endpoints: None,
			},
		}
	}

	/// Checks credentials, redirect URI, extra parameters and endpoint overrides
	pub fn validate(&self) -> Result<(), SocialAuthError> {
		if self.client_id.trim().is_empty() {
			return Err(SocialAuthError::Configuration("Missing client_id".into()));
		}
		if self.client_secret.trim().is_empty() {
			return Err(SocialAuthError::Configuration(
				"Missing client_secret".into(),
			));
		}
		Url::parse(&self.redirect_uri).map_err(|e| {
			SocialAuthError::Configuration(format!("Invalid redirect_uri: {}", e))
		})?;
		if let Some(key) = self
			.parameters
			.keys()
			.find(|key| RESERVED_PARAMETERS.contains(&key.as_str()))
		{
			return Err(SocialAuthError::Configuration(format!(
				"Parameter `{}` is set by the authorization flow",
				key
			)));
		}
		if let Some(endpoints) = &self.endpoints {
			endpoints.validate()?;
		}
		Ok(())
	}
}

/// Builder for [`ProviderConfig`]
#[derive(Debug, Clone)]
pub struct ProviderConfigBuilder {
	config: ProviderConfig,
}

impl ProviderConfigBuilder {
	/// Overrides the provider default scopes
	///
	/// Order is kept and duplicates are dropped.
	pub fn scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.config.scopes = Some(dedup(scopes));
		self
	}

	/// Overrides the provider default profile fields
	pub fn fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.config.fields = Some(dedup(fields));
		self
	}

	pub fn stateless(mut self, stateless: bool) -> Self {
		self.config.stateless = stateless;
		self
	}

	/// Adds an extra authorization URL query parameter
	pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.config.parameters.insert(key.into(), value.into());
		self
	}

	pub fn locale(mut self, locale: impl Into<String>) -> Self {
		self.config.locale = Some(locale.into());
		self
	}

	pub fn endpoints(mut self, endpoints: EndpointConfig) -> Self {
		self.config.endpoints = Some(endpoints);
		self
	}

	/// Validates and returns the configuration
	pub fn build(self) -> Result<ProviderConfig, SocialAuthError> {
		self.config.validate()?;
		Ok(self.config)
	}
}

pub(crate) fn dedup<I, S>(items: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let mut out: Vec<String> = Vec::new();
	for item in items {
		let item = item.into();
		if !out.contains(&item) {
			out.push(item);
		}
	}
	out
}

fn deserialize_dedup<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Vec<String>>::deserialize(deserializer)?.map(dedup))
}

/// Social login settings, keyed by provider name
///
/// ```toml
/// [providers.linkedin]
/// client_id = "..."
/// client_secret = "..."
/// redirect_uri = "https://example.com/auth/linkedin/callback"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialiteSettings {
	/// Per-provider configuration
	#[serde(default)]
	pub providers: BTreeMap<String, ProviderConfig>,
}

impl SocialiteSettings {
	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if the file cannot be read, parsed or validated.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SocialAuthError> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
			SocialAuthError::Configuration(format!(
				"Failed to read {}: {}",
				path.as_ref().display(),
				e
			))
		})?;

		Self::from_toml(&content)
	}

	/// Parse settings from a TOML string.
	pub fn from_toml(content: &str) -> Result<Self, SocialAuthError> {
		let settings: SocialiteSettings = toml::from_str(content)?;
		for (name, config) in &settings.providers {
			config.validate().map_err(|e| match e {
				SocialAuthError::Configuration(msg) => {
					SocialAuthError::Configuration(format!("[providers.{}] {}", name, msg))
				}
				other => other,
			})?;
		}
		Ok(settings)
	}

	/// Configuration of a single provider
	pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
		self.providers.get(name)
	}
}
