//! Social authentication backend
//!
//! Builds configured providers by name from [`SocialiteSettings`].

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::client::SocialProvider;
use crate::core::{
	HttpTransport, ProviderConfig, ReqwestTransport, SocialAuthError, SocialiteSettings,
};
use crate::providers::{ProviderKind, ProviderStrategy};

/// Registry of provider configurations sharing one transport
pub struct SocialAuthBackend {
	transport: Arc<dyn HttpTransport>,
	providers: BTreeMap<String, ProviderConfig>,
}

impl SocialAuthBackend {
	/// Creates an empty backend over the given transport
	pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
		Self {
			transport,
			providers: BTreeMap::new(),
		}
	}

	/// Creates a backend from settings, using a default `reqwest` transport
	pub fn from_settings(settings: SocialiteSettings) -> Result<Self, SocialAuthError> {
		Self::with_transport(settings, Arc::new(ReqwestTransport::new()))
	}

	/// Creates a backend from settings with an injected transport
	///
	/// Every configured name must be a known provider.
	pub fn with_transport(
		settings: SocialiteSettings,
		transport: Arc<dyn HttpTransport>,
	) -> Result<Self, SocialAuthError> {
		let mut backend = Self::new(transport);
		for (name, config) in settings.providers {
			backend.register(&name, config)?;
		}
		Ok(backend)
	}

	/// Registers or replaces the configuration of a provider
	pub fn register(&mut self, name: &str, config: ProviderConfig) -> Result<(), SocialAuthError> {
		let kind: ProviderKind = name.parse()?;
		config.validate()?;

		tracing::debug!(provider = kind.as_str(), "registering provider");
		self.providers.insert(kind.as_str().to_string(), config);
		Ok(())
	}

	/// Names of the configured providers
	pub fn providers(&self) -> Vec<&str> {
		self.providers.keys().map(String::as_str).collect()
	}

	/// Whether a provider is configured
	pub fn has_provider(&self, name: &str) -> bool {
		name.parse::<ProviderKind>()
			.map(|kind| self.providers.contains_key(kind.as_str()))
			.unwrap_or(false)
	}

	/// Builds the provider registered under `name`
	pub fn driver(&self, name: &str) -> Result<SocialProvider<ProviderStrategy>, SocialAuthError> {
		let kind: ProviderKind = name.parse()?;
		let config = self.providers.get(kind.as_str()).ok_or_else(|| {
			SocialAuthError::Configuration(format!("Provider not configured: {}", kind))
		})?;

		Ok(SocialProvider::new(
			kind.strategy(),
			config.clone(),
			Arc::clone(&self.transport),
		))
	}
}
