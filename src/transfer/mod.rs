//! # Transfer Module
//!
//! The matching-and-transfer core: it turns an ordered list of source tracks
//! into instrumental video ids and a [`TransferReport`](crate::types::TransferReport).
//!
//! ```text
//! Track ──► QueryBuilder ──► VideoSearch ──► MatchSelector ──► ResolutionResult
//!                                                                   │
//!                          TransferPipeline ◄── PlaylistWriter ◄────┘
//! ```
//!
//! The core never talks to the network itself. Searching and writing go through
//! the [`VideoSearch`] and [`PlaylistWriter`] seams, implemented for YouTube in
//! [`crate::youtube`] and by fakes in the tests. Every call is awaited one at a
//! time, so tracks are processed strictly in playlist order.

mod pipeline;
mod query;
mod resolver;
mod selector;

pub use pipeline::TransferPipeline;
pub use query::{
    INSTRUMENTAL_QUALIFIER, QueryBuilder, collapse_whitespace, normalize_title, primary_artist,
};
pub use resolver::TrackResolver;
pub use selector::{MatchSelector, MatchWeights, ScoredCandidate, tokenize};

use crate::{errors::ProviderError, types::CandidateVideo};

/// Searches the video platform for a query, returning results in rank order.
#[allow(async_fn_in_trait)]
pub trait VideoSearch {
    async fn search(&self, query: &str) -> Result<Vec<CandidateVideo>, ProviderError>;
}

/// Appends one video to the destination playlist.
#[allow(async_fn_in_trait)]
pub trait PlaylistWriter {
    async fn add_video(&self, video_id: &str) -> Result<(), ProviderError>;
}

/// Writer used by `--dry-run`: accepts every video and writes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunWriter;

impl PlaylistWriter for DryRunWriter {
    async fn add_video(&self, _video_id: &str) -> Result<(), ProviderError> {
        Ok(())
    }
}

impl<T: VideoSearch> VideoSearch for &T {
    async fn search(&self, query: &str) -> Result<Vec<CandidateVideo>, ProviderError> {
        (**self).search(query).await
    }
}

impl<T: PlaylistWriter> PlaylistWriter for &T {
    async fn add_video(&self, video_id: &str) -> Result<(), ProviderError> {
        (**self).add_video(video_id).await
    }
}
