//! Error types shared by the transfer core and the provider adapters.

use thiserror::Error;

/// Failure reported by one of the remote collaborators (search, playlist
/// write, playlist read, token exchange).
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(String),
    #[error("{status}: {body}")]
    Status { status: u16, body: String },
    #[error("auth error: {0}")]
    Auth(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Decode(e.to_string())
    }
}

/// Per-track failures recorded in a transfer report, plus the one fatal
/// input error raised before any track is processed.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("search failed for '{query}': {source}")]
    SearchProvider {
        query: String,
        #[source]
        source: ProviderError,
    },
    #[error("failed to add video {video_id}: {source}")]
    Write {
        video_id: String,
        #[source]
        source: ProviderError,
    },
    #[error("malformed track at position {position}: missing {field}")]
    MalformedTrack { position: usize, field: &'static str },
    #[error("invalid playlist input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Turns a non-2xx response into [`ProviderError::Status`], keeping the body
/// for the error message.
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Status {
        status: status.as_u16(),
        body,
    })
}
