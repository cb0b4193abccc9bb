//! Core types shared by every provider

pub mod config;
pub mod error;
pub mod payload;
pub mod provider;
pub mod token;
pub mod transport;
pub mod user;

pub use config::{EndpointConfig, ProviderConfig, ProviderConfigBuilder, SocialiteSettings};
pub use error::{FailureCause, SocialAuthError};
pub use payload::RawPayload;
pub use provider::{OAuthProvider, ProfileRequest, TokenFormat};
pub use token::AccessToken;
pub use transport::{
	HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport, TransportError,
};
pub use user::{User, UserBuilder};

#[cfg(test)]
pub use transport::MockHttpTransport;
