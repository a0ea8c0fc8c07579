use std::{fmt, path::PathBuf, str::FromStr};

use chrono::Utc;
use reqwest::Client;

use crate::{
    config,
    errors::{ConfigError, ProviderError},
    types::Token,
};

/// The two OAuth-protected platforms the tool talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Spotify,
    YouTube,
}

/// OAuth endpoints and client credentials of a provider.
#[derive(Debug, Clone)]
pub struct OAuthSettings {
    pub auth_url: String,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub scope: String,
}

impl Provider {
    pub fn settings(&self) -> Result<OAuthSettings, ConfigError> {
        match self {
            Provider::Spotify => Ok(OAuthSettings {
                auth_url: config::spotify_apiauth_url()?,
                token_url: config::spotify_apitoken_url()?,
                client_id: config::spotify_client_id()?,
                client_secret: config::spotify_client_secret(),
                redirect_uri: config::spotify_redirect_uri()?,
                scope: config::spotify_scope()?,
            }),
            Provider::YouTube => Ok(OAuthSettings {
                auth_url: config::youtube_apiauth_url()?,
                token_url: config::youtube_apitoken_url()?,
                client_id: config::youtube_client_id()?,
                client_secret: Some(config::youtube_client_secret()?),
                redirect_uri: config::youtube_redirect_uri()?,
                scope: config::youtube_scope()?,
            }),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Provider::Spotify => "spotify",
            Provider::YouTube => "youtube",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Spotify => write!(f, "Spotify"),
            Provider::YouTube => write!(f, "YouTube"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spotify" => Ok(Provider::Spotify),
            "youtube" | "yt" => Ok(Provider::YouTube),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

/// Holds a provider's OAuth token, persisting it to the local cache and
/// refreshing it shortly before it expires.
pub struct TokenManager {
    provider: Provider,
    token: Token,
}

impl TokenManager {
    pub fn new(provider: Provider, token: Token) -> Self {
        TokenManager { provider, token }
    }

    pub async fn load(provider: Provider) -> Result<Self, String> {
        let path = Self::token_path(provider);
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { provider, token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path(self.provider);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns an access token, refreshing and persisting it first if it is
    /// about to expire. A failed refresh is reported as [`ProviderError::Auth`].
    pub async fn get_valid_token(&mut self) -> Result<String, ProviderError> {
        if self.is_expired() {
            let new_token = self.refresh_token().await?;
            self.token = new_token;
            if let Err(e) = self.persist().await {
                crate::warning!("Failed to save refreshed {} token: {}", self.provider, e);
            }
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + 240 >= self.token.obtained_at + self.token.expires_in
    }

    async fn refresh_token(&self) -> Result<Token, ProviderError> {
        let settings = self.provider.settings()?;
        let mut form = vec![
            ("grant_type", "refresh_token".to_string()),
            ("refresh_token", self.token.refresh_token.clone()),
            ("client_id", settings.client_id.clone()),
        ];
        if let Some(secret) = settings.client_secret {
            form.push(("client_secret", secret));
        }

        let res = Client::new()
            .post(&settings.token_url)
            .form(&form)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(ProviderError::Auth(format!(
                "{} token refresh failed with {}. Run instrumentalcli auth {}",
                self.provider,
                res.status(),
                self.provider.key()
            )));
        }

        let json: serde_json::Value = res.json().await?;
        Ok(token_from_response(&json, Some(&self.token.refresh_token)))
    }

    fn token_path(provider: Provider) -> PathBuf {
        let mut path = config::data_dir();
        path.push(format!("cache/{}_token.json", provider.key()));
        path
    }
}

/// Builds a [`Token`] from an OAuth token endpoint response.
///
/// Refresh responses may omit `refresh_token`; `previous_refresh` is kept then.
pub fn token_from_response(json: &serde_json::Value, previous_refresh: Option<&str>) -> Token {
    let refresh_token = json["refresh_token"]
        .as_str()
        .or(previous_refresh)
        .unwrap_or_default()
        .to_string();

    Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token,
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    }
}
