//! Social Authentication
//!
//! OAuth2 "social login" for third-party identity providers: builds
//! authorization URLs, exchanges authorization codes for access tokens,
//! fetches the user profile and normalizes it into a [`User`].
//!
//! # Supported Providers
//!
//! - **LinkedIn**: OAuth 2.0, stateless (no `state` round-trip)
//! - **GitHub**: OAuth 2.0 with CSRF state
//!
//! # Flow
//!
//! Every provider runs the same authorization code flow through
//! [`SocialProvider`]; a provider only implements the [`OAuthProvider`]
//! hooks (endpoints, profile fetch, field mapping). The HTTP transport is
//! injected, see [`HttpTransport`].
//!
//! # Example
//!
//! ```ignore
//! use socialite_auth::{SocialAuthBackend, SocialiteSettings};
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = SocialiteSettings::from_file("socialite.toml").unwrap();
//!     let backend = SocialAuthBackend::from_settings(settings).unwrap();
//!
//!     let github = backend.driver("github").unwrap();
//!     let request = github.authorization_url(None).unwrap();
//!     // redirect to request.url, keep request.state
//!
//!     // on callback
//!     github.verify_state(request.state.as_deref(), Some(&state)).unwrap();
//!     let user = github.user(&code).await.unwrap();
//! }
//! ```

pub mod backend;
pub mod client;
pub mod core;
pub mod flow;
pub mod providers;

// Re-export core types
pub use crate::core::{
	AccessToken, EndpointConfig, FailureCause, HttpRequest, HttpResponse, HttpTransport, Method,
	OAuthProvider, ProfileRequest, ProviderConfig, ProviderConfigBuilder, RawPayload,
	ReqwestTransport, SocialAuthError, SocialiteSettings, TokenFormat, TransportError, User,
	UserBuilder,
};

// Re-export flow types
pub use flow::{AuthorizationRequest, generate_state, verify_state};

// Re-export providers
pub use providers::{GitHubProvider, LinkedInProvider, ProviderKind, ProviderStrategy};

// Re-export the driver and backend
pub use backend::SocialAuthBackend;
pub use client::SocialProvider;
