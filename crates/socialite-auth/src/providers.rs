//! OAuth2 provider implementations

pub mod github;
pub mod linkedin;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

pub use github::GitHubProvider;
pub use linkedin::LinkedInProvider;

use crate::core::{
	EndpointConfig, OAuthProvider, ProfileRequest, ProviderConfig, RawPayload, SocialAuthError,
	TokenFormat, User,
};

/// Names of the shipped providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
	LinkedIn,
	GitHub,
}

impl ProviderKind {
	/// All shipped providers
	pub const ALL: [ProviderKind; 2] = [ProviderKind::LinkedIn, ProviderKind::GitHub];

	/// Name used in settings and URLs
	pub fn as_str(&self) -> &'static str {
		match self {
			ProviderKind::LinkedIn => "linkedin",
			ProviderKind::GitHub => "github",
		}
	}

	/// Provider hooks for this kind
	pub fn strategy(&self) -> ProviderStrategy {
		match self {
			ProviderKind::LinkedIn => ProviderStrategy::LinkedIn(LinkedInProvider::new()),
			ProviderKind::GitHub => ProviderStrategy::GitHub(GitHubProvider::new()),
		}
	}
}

impl fmt::Display for ProviderKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ProviderKind {
	type Err = SocialAuthError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"linkedin" => Ok(ProviderKind::LinkedIn),
			"github" => Ok(ProviderKind::GitHub),
			other => Err(SocialAuthError::Configuration(format!(
				"Unknown provider: {}",
				other
			))),
		}
	}
}

/// Closed set of providers, dispatched statically
#[derive(Debug, Clone)]
pub enum ProviderStrategy {
	LinkedIn(LinkedInProvider),
	GitHub(GitHubProvider),
}

impl ProviderStrategy {
	pub fn kind(&self) -> ProviderKind {
		match self {
			ProviderStrategy::LinkedIn(_) => ProviderKind::LinkedIn,
			ProviderStrategy::GitHub(_) => ProviderKind::GitHub,
		}
	}

	fn inner(&self) -> &dyn OAuthProvider {
		match self {
			ProviderStrategy::LinkedIn(provider) => provider,
			ProviderStrategy::GitHub(provider) => provider,
		}
	}
}

#[async_trait]
impl OAuthProvider for ProviderStrategy {
	fn name(&self) -> &str {
		self.inner().name()
	}

	fn default_endpoints(&self) -> EndpointConfig {
		self.inner().default_endpoints()
	}

	fn default_scopes(&self) -> Vec<String> {
		self.inner().default_scopes()
	}

	fn default_fields(&self) -> Vec<String> {
		self.inner().default_fields()
	}

	fn scope_separator(&self) -> &str {
		self.inner().scope_separator()
	}

	fn is_stateless(&self) -> bool {
		self.inner().is_stateless()
	}

	fn token_format(&self) -> TokenFormat {
		self.inner().token_format()
	}

	fn token_headers(&self) -> Vec<(String, String)> {
		self.inner().token_headers()
	}

	fn extra_token_fields(&self, code: &str) -> Vec<(String, String)> {
		self.inner().extra_token_fields(code)
	}

	async fn fetch_profile(
		&self,
		request: ProfileRequest<'_>,
	) -> Result<RawPayload, SocialAuthError> {
		match self {
			ProviderStrategy::LinkedIn(provider) => provider.fetch_profile(request).await,
			ProviderStrategy::GitHub(provider) => provider.fetch_profile(request).await,
		}
	}

	fn map_user(&self, raw: RawPayload, config: &ProviderConfig) -> Result<User, SocialAuthError> {
		self.inner().map_user(raw, config)
	}
}
