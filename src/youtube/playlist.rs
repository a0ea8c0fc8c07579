use std::{fmt, str::FromStr};

use crate::{
    errors::{ProviderError, ensure_success},
    transfer::PlaylistWriter,
    types::{
        AddPlaylistItemRequest, CreatePlaylistRequest, CreatePlaylistResponse, PlaylistItemSnippet,
        PlaylistSnippet, PlaylistStatus, ResourceId,
    },
    youtube::YouTubeClient,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Privacy {
    #[default]
    Private,
    Unlisted,
    Public,
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Privacy::Private => "private",
            Privacy::Unlisted => "unlisted",
            Privacy::Public => "public",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for Privacy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "private" => Ok(Privacy::Private),
            "unlisted" => Ok(Privacy::Unlisted),
            "public" => Ok(Privacy::Public),
            other => Err(format!(
                "invalid privacy '{}', expected private, unlisted or public",
                other
            )),
        }
    }
}

impl YouTubeClient {
    /// Creates a new playlist and returns its id.
    pub async fn create_playlist(
        &self,
        title: &str,
        description: &str,
        privacy: Privacy,
    ) -> Result<String, ProviderError> {
        let token = self.token().await?;
        let body = CreatePlaylistRequest {
            snippet: PlaylistSnippet {
                title: title.to_string(),
                description: description.to_string(),
            },
            status: PlaylistStatus {
                privacy_status: privacy.to_string(),
            },
        };

        let response = self
            .http()
            .post(self.endpoint("playlists"))
            .bearer_auth(token)
            .query(&[("part", "snippet,status")])
            .json(&body)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        Ok(response.json::<CreatePlaylistResponse>().await?.id)
    }

    pub async fn add_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<(), ProviderError> {
        let token = self.token().await?;
        let body = AddPlaylistItemRequest {
            snippet: PlaylistItemSnippet {
                playlist_id: playlist_id.to_string(),
                resource_id: ResourceId {
                    kind: "youtube#video".to_string(),
                    video_id: video_id.to_string(),
                },
            },
        };

        let response = self
            .http()
            .post(self.endpoint("playlistItems"))
            .bearer_auth(token)
            .query(&[("part", "snippet")])
            .json(&body)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// Appends videos to one existing YouTube playlist.
pub struct YouTubePlaylistWriter<'a> {
    client: &'a YouTubeClient,
    playlist_id: String,
}

impl<'a> YouTubePlaylistWriter<'a> {
    pub fn new(client: &'a YouTubeClient, playlist_id: String) -> Self {
        Self {
            client,
            playlist_id,
        }
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }
}

impl PlaylistWriter for YouTubePlaylistWriter<'_> {
    async fn add_video(&self, video_id: &str) -> Result<(), ProviderError> {
        self.client.add_playlist_item(&self.playlist_id, video_id).await
    }
}
