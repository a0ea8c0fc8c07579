use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::management::Provider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub provider: Provider,
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// A track read from the source playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub source_id: String,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            source_id: source_id.into(),
        }
    }
}

/// A search string plus the parts of the track that candidates are scored on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    /// Normalized track title.
    pub title: String,
    /// First credited artist.
    pub artist: String,
}

/// One search result from the video platform. `rank` is the position in the
/// result list, 0 being the top hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateVideo {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub rank: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStatus {
    Matched,
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    pub track: Track,
    pub video_id: Option<String>,
    pub status: ResolutionStatus,
}

impl ResolutionResult {
    pub fn matched(track: Track, video_id: String) -> Self {
        Self {
            track,
            video_id: Some(video_id),
            status: ResolutionStatus::Matched,
        }
    }

    pub fn not_found(track: Track) -> Self {
        Self {
            track,
            video_id: None,
            status: ResolutionStatus::NotFound,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackOutcome {
    Added { video_id: String },
    NotFound,
    Failed { reason: String },
}

/// Per-track line of a transfer report, in source playlist order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub position: usize,
    pub title: String,
    pub artist: String,
    pub outcome: TrackOutcome,
}

/// Outcome of a whole transfer run. Only the four counters/errors are
/// serialized; `entries` is kept for terminal presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransferReport {
    pub total_tracks: usize,
    pub added_videos: usize,
    pub not_found: usize,
    pub errors: Vec<String>,
    #[serde(skip)]
    pub entries: Vec<ReportEntry>,
}

#[derive(Tabled)]
pub struct ReportTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artist: String,
    pub result: String,
}

#[derive(Tabled)]
pub struct CandidateTableRow {
    pub rank: usize,
    pub title: String,
    pub channel: String,
    pub overlap: String,
    pub score: String,
    pub selected: String,
}

// Spotify Web API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistDetails {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<SpotifyTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrack {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

// YouTube Data API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    pub snippet: PlaylistSnippet,
    pub status: PlaylistStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSnippet {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStatus {
    pub privacy_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlaylistItemRequest {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub playlist_id: String,
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: String,
    pub video_id: String,
}
