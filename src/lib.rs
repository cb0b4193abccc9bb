//! # Socialite
//!
//! OAuth2 social login for Rust: one authorization code flow, many identity
//! providers, one normalized [`User`].
//!
//! ## Providers
//!
//! - `linkedin` - LinkedIn v2 API, stateless
//! - `github` - GitHub, with CSRF state and primary email lookup
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use socialite::prelude::*;
//!
//! let settings = SocialiteSettings::from_toml(r#"
//!     [providers.linkedin]
//!     client_id = "client"
//!     client_secret = "secret"
//!     redirect_uri = "https://example.com/auth/linkedin/callback"
//! "#)?;
//! let backend = SocialAuthBackend::from_settings(settings)?;
//!
//! let linkedin = backend.driver("linkedin")?;
//! let redirect = linkedin.authorization_url(None)?;
//!
//! // GET /auth/linkedin/callback?code=...
//! let user = linkedin.user(&code).await?;
//! println!("{} <{}>", user.id(), user.email().unwrap_or_default());
//! ```

pub use socialite_auth::*;

/// Common imports
pub mod prelude {
	pub use socialite_auth::{
		AccessToken, AuthorizationRequest, HttpTransport, OAuthProvider, ProviderConfig,
		ProviderKind, RawPayload, ReqwestTransport, SocialAuthBackend, SocialAuthError,
		SocialProvider, SocialiteSettings, User,
	};
}
