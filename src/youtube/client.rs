use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config,
    errors::{ProviderError, ensure_success},
    management::{Provider, TokenManager},
    transfer::VideoSearch,
    types::{CandidateVideo, SearchListResponse},
    utils,
};

/// Music category id of the YouTube Data API.
const MUSIC_CATEGORY_ID: &str = "10";

pub struct YouTubeClient {
    client: Client,
    api_url: String,
    max_results: u32,
    token_mgr: Mutex<TokenManager>,
}

impl YouTubeClient {
    pub fn new(api_url: String, max_results: u32, token_mgr: TokenManager) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            max_results,
            token_mgr: Mutex::new(token_mgr),
        }
    }

    /// Builds a client from the configured API URL and the cached YouTube token.
    pub async fn from_config() -> Result<Self, ProviderError> {
        let token_mgr = TokenManager::load(Provider::YouTube).await.map_err(|e| {
            ProviderError::Auth(format!(
                "Failed to load YouTube token. Please run instrumentalcli auth youtube\n Error: {}",
                e
            ))
        })?;

        Ok(Self::new(
            config::youtube_apiurl()?,
            config::search_max_results()?,
            token_mgr,
        ))
    }

    pub(crate) async fn token(&self) -> Result<String, ProviderError> {
        self.token_mgr.lock().await.get_valid_token().await
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.api_url, resource)
    }
}

impl VideoSearch for YouTubeClient {
    async fn search(&self, query: &str) -> Result<Vec<CandidateVideo>, ProviderError> {
        let token = self.token().await?;
        let max_results = self.max_results.to_string();

        let response = self
            .client
            .get(self.endpoint("search"))
            .bearer_auth(token)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("videoCategoryId", MUSIC_CATEGORY_ID),
                ("maxResults", max_results.as_str()),
                ("q", query),
            ])
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let json = response.json::<SearchListResponse>().await?;

        Ok(json
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some((video_id, item.snippet))
            })
            .enumerate()
            .map(|(rank, (video_id, snippet))| CandidateVideo {
                video_id,
                title: utils::unescape_html(&snippet.title),
                channel: utils::unescape_html(&snippet.channel_title),
                rank,
            })
            .collect())
    }
}
