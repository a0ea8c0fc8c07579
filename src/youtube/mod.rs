//! # YouTube Integration Module
//!
//! The destination side of a transfer, built on the YouTube Data API v3.
//!
//! - [`YouTubeClient`] - authenticated client; implements
//!   [`VideoSearch`](crate::transfer::VideoSearch) through `search.list` and
//!   creates playlists through `playlists.insert`
//! - [`YouTubePlaylistWriter`] - implements
//!   [`PlaylistWriter`](crate::transfer::PlaylistWriter) for one playlist
//!   through `playlistItems.insert`
//!
//! Each request is sent exactly once. Quota and rate-limit responses surface
//! as [`ProviderError::Status`](crate::errors::ProviderError::Status) and end
//! up in the transfer report of the affected track.

mod client;
mod playlist;

pub use client::YouTubeClient;
pub use playlist::{Privacy, YouTubePlaylistWriter};
