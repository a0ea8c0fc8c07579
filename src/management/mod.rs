mod auth;

pub use auth::OAuthSettings;
pub use auth::Provider;
pub use auth::TokenManager;
pub use auth::token_from_response;
