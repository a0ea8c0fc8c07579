use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    config,
    errors::{ProviderError, ensure_success},
    management::TokenManager,
    types::{PlaylistDetails, PlaylistItem, PlaylistTracksPage, Track},
};

const PAGE_LIMIT: u32 = 100;

/// Fetches the name and description of a playlist.
pub async fn playlist_details(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
) -> Result<PlaylistDetails, ProviderError> {
    let api_url = format!(
        "{uri}/playlists/{id}?fields=name,description",
        uri = config::spotify_apiurl()?,
        id = playlist_id
    );

    let token = token_mgr.get_valid_token().await?;
    let response = Client::new().get(&api_url).bearer_auth(token).send().await?;
    let response = ensure_success(response).await?;

    Ok(response.json::<PlaylistDetails>().await?)
}

/// Fetches every track of a playlist in playlist order.
///
/// Items without track data (removed tracks, unavailable local files) are kept
/// as tracks with empty fields so they show up as malformed in the transfer
/// report instead of silently disappearing.
///
/// # Errors
///
/// Any failed page aborts the whole fetch; a partial playlist is never returned.
pub async fn playlist_tracks(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
) -> Result<Vec<Track>, ProviderError> {
    let mut next_url = Some(format!(
        "{uri}/playlists/{id}/tracks?limit={limit}&fields=items(track(id,name,artists(name))),next,total",
        uri = config::spotify_apiurl()?,
        id = playlist_id,
        limit = PAGE_LIMIT
    ));

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist tracks from Spotify...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let client = Client::new();
    let mut tracks: Vec<Track> = Vec::new();

    while let Some(api_url) = next_url {
        let token = match token_mgr.get_valid_token().await {
            Ok(token) => token,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        let page = match fetch_page(&client, &api_url, &token).await {
            Ok(page) => page,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        tracks.extend(tracks_from_items(page.items));
        if let Some(total) = page.total {
            pb.set_message(format!("Fetched {}/{} tracks...", tracks.len(), total));
        }
        next_url = page.next;
    }

    pb.finish_and_clear();
    Ok(tracks)
}

async fn fetch_page(client: &Client, api_url: &str, token: &str) -> Result<PlaylistTracksPage, ProviderError> {
    let response = client.get(api_url).bearer_auth(token).send().await?;
    let response = ensure_success(response).await?;
    Ok(response.json::<PlaylistTracksPage>().await?)
}

/// Converts playlist items into tracks, joining multiple artists with ", ".
pub fn tracks_from_items(items: Vec<PlaylistItem>) -> Vec<Track> {
    items
        .into_iter()
        .map(|item| match item.track {
            Some(track) => Track {
                title: track.name,
                artist: track
                    .artists
                    .iter()
                    .map(|a| a.name.as_str())
                    .filter(|name| !name.is_empty())
                    .collect::<Vec<_>>()
                    .join(", "),
                source_id: track.id.unwrap_or_default(),
            },
            None => Track::new("", "", ""),
        })
        .collect()
}
