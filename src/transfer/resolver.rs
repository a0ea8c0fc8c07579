use std::collections::HashSet;

use crate::{
    errors::TransferError,
    transfer::{MatchSelector, QueryBuilder, VideoSearch},
    types::{CandidateVideo, ResolutionResult, SearchQuery, Track},
};

/// Resolves single tracks: build query, search, select.
///
/// When the `instrumental` query finds nothing acceptable, each fallback
/// qualifier (e.g. `karaoke`) is tried in order. A failing search aborts the
/// resolution with [`TransferError::SearchProvider`] rather than being read as
/// "not found".
pub struct TrackResolver<S> {
    search: S,
    builder: QueryBuilder,
    selector: MatchSelector,
    fallback_qualifiers: Vec<String>,
}

impl<S: VideoSearch> TrackResolver<S> {
    pub fn new(search: S, selector: MatchSelector) -> Self {
        Self {
            search,
            builder: QueryBuilder::new(),
            selector,
            fallback_qualifiers: Vec::new(),
        }
    }

    pub fn with_fallback_qualifiers(mut self, qualifiers: Vec<String>) -> Self {
        self.fallback_qualifiers = qualifiers;
        self
    }

    pub fn selector(&self) -> &MatchSelector {
        &self.selector
    }

    pub async fn resolve(&self, track: &Track) -> Result<ResolutionResult, TransferError> {
        let mut queries = vec![self.builder.build(track)];
        queries.extend(
            self.fallback_qualifiers
                .iter()
                .map(|qualifier| self.builder.build_with_qualifier(track, qualifier)),
        );
        let mut seen = HashSet::new();
        queries.retain(|query| seen.insert(query.text.clone()));

        for query in queries {
            let candidates = self.candidates(&query).await?;
            if let Some(video_id) = self.selector.select(&query, &candidates) {
                return Ok(ResolutionResult::matched(track.clone(), video_id));
            }
        }

        Ok(ResolutionResult::not_found(track.clone()))
    }

    /// Runs one search and drops results without a video id.
    pub async fn candidates(&self, query: &SearchQuery) -> Result<Vec<CandidateVideo>, TransferError> {
        let candidates = self
            .search
            .search(&query.text)
            .await
            .map_err(|source| TransferError::SearchProvider {
                query: query.text.clone(),
                source,
            })?;

        Ok(candidates
            .into_iter()
            .filter(|c| !c.video_id.trim().is_empty())
            .collect())
    }
}
