//! # Spotify Integration Module
//!
//! Read-only access to the source playlist through the Spotify Web API.
//!
//! - [`playlist::playlist_details`] - playlist name and description, used to
//!   derive the default title of the YouTube playlist
//! - [`playlist::playlist_tracks`] - every track of a playlist, following the
//!   `next` links 100 items at a time
//!
//! Authentication is handled by [`crate::auth`] and tokens are kept fresh by
//! [`crate::management::TokenManager`]. Requests are made once; a non-2xx
//! response is returned as [`crate::errors::ProviderError::Status`].

pub mod playlist;
