//! # CLI Module
//!
//! User-facing commands of `instrumentalcli`. Each command loads what it needs
//! from [`crate::config`] and the token cache, delegates to the provider
//! adapters and the [`crate::transfer`] core, and prints the outcome with the
//! crate's output macros.
//!
//! - [`auth`] - OAuth flow for Spotify or YouTube
//! - [`transfer`] - copy a Spotify playlist into a new YouTube playlist of
//!   instrumental versions and print the transfer report
//! - [`match_track`] - show how the candidates for one track score
//!
//! ```bash
//! instrumentalcli auth spotify
//! instrumentalcli auth youtube
//! instrumentalcli transfer --playlist https://open.spotify.com/playlist/<id>
//! instrumentalcli transfer --playlist <id> --dry-run --json
//! instrumentalcli match --title "Shape of You" --artist "Ed Sheeran"
//! ```

mod auth;
mod search;
mod transfer;

pub use auth::auth;
pub use search::match_track;
pub use transfer::TransferOptions;
pub use transfer::transfer;
