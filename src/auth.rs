//! OAuth 2.0 authorization code flow with PKCE, shared by Spotify and YouTube.

use std::{sync::Arc, time::Duration};

use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::{
    Res,
    errors::{ProviderError, ensure_success},
    management::{Provider, TokenManager, token_from_response},
    server::start_api_server,
    success,
    types::{PkceToken, Token},
    utils, warning,
};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the complete authorization flow for `provider`.
///
/// 1. Generates a PKCE code verifier and its SHA-256 challenge
/// 2. Starts the local callback server
/// 3. Opens the provider's consent page in the default browser
/// 4. Waits for the callback handler to exchange the code for a token
/// 5. Persists the token in the provider's cache file
///
/// # Errors
///
/// Fails when the provider settings are incomplete, when no token arrives
/// before the timeout, or when the token cannot be written to the cache.
pub async fn auth(provider: Provider, shared_state: Arc<Mutex<Option<PkceToken>>>) -> Res<()> {
    let settings = provider.settings()?;

    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let mut params = vec![
        ("client_id", settings.client_id.as_str()),
        ("response_type", "code"),
        ("redirect_uri", settings.redirect_uri.as_str()),
        ("code_challenge", code_challenge.as_str()),
        ("code_challenge_method", "S256"),
        ("scope", settings.scope.as_str()),
    ];
    if provider == Provider::YouTube {
        // Google only hands out refresh tokens for offline access with explicit consent
        params.push(("access_type", "offline"));
        params.push(("prompt", "consent"));
    }
    let auth_url = Url::parse_with_params(&settings.auth_url, &params)?;

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            provider,
            code_verifier,
            token: None,
        });
    }

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state)
        .await
        .ok_or_else(|| format!("{} authentication failed or timed out.", provider))?;

    let token_manager = TokenManager::new(provider, token);
    token_manager
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;

    success!("{} authentication successful!", provider);
    Ok(())
}

async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < CALLBACK_TIMEOUT {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|pkce| pkce.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for a token at the provider's token endpoint.
pub async fn exchange_code_pkce(
    provider: Provider,
    code: &str,
    verifier: &str,
) -> Result<Token, ProviderError> {
    let settings = provider.settings()?;

    let mut form = vec![
        ("grant_type", "authorization_code"),
        ("client_id", settings.client_id.as_str()),
        ("code", code),
        ("code_verifier", verifier),
        ("redirect_uri", settings.redirect_uri.as_str()),
    ];
    if let Some(secret) = settings.client_secret.as_deref() {
        form.push(("client_secret", secret));
    }

    let res = Client::new()
        .post(&settings.token_url)
        .form(&form)
        .send()
        .await?;
    let res = ensure_success(res).await?;

    let json: serde_json::Value = res.json().await?;
    if json["access_token"].as_str().is_none() {
        return Err(ProviderError::Auth(format!(
            "{} token response has no access token",
            provider
        )));
    }

    Ok(token_from_response(&json, None))
}
