//! Configuration management for the instrumental playlist transfer tool.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It covers the Spotify and YouTube OAuth settings,
//! the callback server address, and the tunable weights of the match heuristic.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, str::FromStr};

use crate::{errors::ConfigError, transfer::MatchWeights};

/// Default number of search results requested per query.
pub const DEFAULT_SEARCH_MAX_RESULTS: u32 = 5;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `instrumentalcli/.env` inside the platform-specific
/// local data directory. A missing file is not an error; variables may come
/// from the process environment instead.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/instrumentalcli/.env`
/// - macOS: `~/Library/Application Support/instrumentalcli/.env`
/// - Windows: `%LOCALAPPDATA%/instrumentalcli/.env`
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the application's directory inside the local data directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("instrumentalcli");
    path
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn optional(key: &'static str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn list_or(key: &'static str, default: Vec<String>) -> Vec<String> {
    match optional(key) {
        Some(value) => split_list(&value),
        None => default,
    }
}

/// Splits a comma-separated setting into trimmed, lowercased, non-empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns the address the local OAuth callback server binds to, e.g. `127.0.0.1:8080`.
pub fn server_addr() -> Result<String, ConfigError> {
    required("SERVER_ADDRESS")
}

/// Returns the Spotify playlist used when `transfer` is called without `--playlist`.
pub fn default_playlist() -> Option<String> {
    optional("SPOTIFY_PLAYLIST_ID")
}

pub fn spotify_client_id() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Spotify's PKCE flow works without a secret, so this one is optional.
pub fn spotify_client_secret() -> Option<String> {
    optional("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

pub fn spotify_redirect_uri() -> Result<String, ConfigError> {
    required("SPOTIFY_API_REDIRECT_URI")
}

/// Returns the Spotify scopes, e.g. `playlist-read-private`.
pub fn spotify_scope() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_SCOPE")
}

pub fn spotify_apiauth_url() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_URL")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> Result<String, ConfigError> {
    required("SPOTIFY_API_URL")
}

pub fn spotify_apitoken_url() -> Result<String, ConfigError> {
    required("SPOTIFY_API_TOKEN_URL")
}

pub fn youtube_client_id() -> Result<String, ConfigError> {
    required("YOUTUBE_API_AUTH_CLIENT_ID")
}

/// Google requires the client secret even for installed applications using PKCE.
pub fn youtube_client_secret() -> Result<String, ConfigError> {
    required("YOUTUBE_API_AUTH_CLIENT_SECRET")
}

pub fn youtube_redirect_uri() -> Result<String, ConfigError> {
    required("YOUTUBE_API_REDIRECT_URI")
}

/// Returns the YouTube scopes, e.g. `https://www.googleapis.com/auth/youtube`.
pub fn youtube_scope() -> Result<String, ConfigError> {
    required("YOUTUBE_API_AUTH_SCOPE")
}

pub fn youtube_apiauth_url() -> Result<String, ConfigError> {
    required("YOUTUBE_API_AUTH_URL")
}

/// Returns the YouTube Data API base URL, e.g. `https://www.googleapis.com/youtube/v3`.
pub fn youtube_apiurl() -> Result<String, ConfigError> {
    required("YOUTUBE_API_URL")
}

pub fn youtube_apitoken_url() -> Result<String, ConfigError> {
    required("YOUTUBE_API_TOKEN_URL")
}

/// Returns how many results a single YouTube search requests (1-50).
pub fn search_max_results() -> Result<u32, ConfigError> {
    let value = parsed_or("SEARCH_MAX_RESULTS", DEFAULT_SEARCH_MAX_RESULTS)?;
    if !(1..=50).contains(&value) {
        return Err(ConfigError::Invalid {
            key: "SEARCH_MAX_RESULTS",
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Returns the qualifiers tried after `instrumental` finds nothing.
pub fn search_fallback_qualifiers() -> Vec<String> {
    list_or("SEARCH_FALLBACK_QUALIFIERS", vec!["karaoke".to_string()])
}

/// Builds the match weights from `MATCH_*` variables, falling back to
/// [`MatchWeights::default`] for every unset value.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
pub fn match_weights() -> Result<MatchWeights, ConfigError> {
    let defaults = MatchWeights::default();
    Ok(MatchWeights {
        acceptance_threshold: parsed_or("MATCH_THRESHOLD", defaults.acceptance_threshold)?,
        artist_weight: parsed_or("MATCH_ARTIST_WEIGHT", defaults.artist_weight)?,
        bonus_weight: parsed_or("MATCH_BONUS_WEIGHT", defaults.bonus_weight)?,
        exclusion_penalty: parsed_or("MATCH_EXCLUSION_PENALTY", defaults.exclusion_penalty)?,
        rank_penalty: parsed_or("MATCH_RANK_PENALTY", defaults.rank_penalty)?,
        bonus_terms: list_or("MATCH_BONUS_TERMS", defaults.bonus_terms),
        exclusion_terms: list_or("MATCH_EXCLUSION_TERMS", defaults.exclusion_terms),
    })
}
