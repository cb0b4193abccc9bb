//! OAuth2 authorization code flow steps

pub mod authorization;
pub mod state;
pub mod token_exchange;
pub mod user_info;

pub use authorization::{AuthorizationFlow, AuthorizationRequest, format_scopes};
pub use state::{generate_state, verify_state};
pub use token_exchange::TokenExchangeFlow;
pub use user_info::UserInfoClient;
