use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    errors::TransferError,
    types::{ReportEntry, ReportTableRow, TrackOutcome},
};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Extracts a Spotify playlist id from a bare id, a `spotify:playlist:<id>`
/// URI or an `open.spotify.com/playlist/<id>` URL.
pub fn parse_playlist_id(input: &str) -> Result<String, TransferError> {
    let input = input.trim();

    let candidate = if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        rest
    } else if let Some((_, rest)) = input.split_once("/playlist/") {
        rest.split(['?', '#', '/']).next().unwrap_or_default()
    } else {
        input
    };

    if candidate.is_empty() || !candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TransferError::InvalidInput(format!(
            "'{}' is not a Spotify playlist id, URI or URL",
            input
        )));
    }

    Ok(candidate.to_string())
}

/// Decodes the handful of HTML entities YouTube puts into snippet titles.
pub fn unescape_html(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn report_table_rows(entries: &[ReportEntry]) -> Vec<ReportTableRow> {
    entries
        .iter()
        .map(|entry| ReportTableRow {
            position: entry.position,
            title: entry.title.clone(),
            artist: entry.artist.clone(),
            result: match &entry.outcome {
                TrackOutcome::Added { video_id } => format!("added {}", video_id),
                TrackOutcome::NotFound => "not found".to_string(),
                TrackOutcome::Failed { reason } => format!("error: {}", reason),
            },
        })
        .collect()
}
