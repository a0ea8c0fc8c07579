//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that runs during
//! `instrumentalcli auth`.
//!
//! - [`callback`] - OAuth redirect target. Exchanges the authorization code
//!   for a Spotify or YouTube token using the PKCE verifier held in shared state.
//! - [`health`] - Returns the application status and version.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use instrumentalcli::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
