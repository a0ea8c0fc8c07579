use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::types::PkceToken;

/// Reports liveness and which provider, if any, is waiting for its callback.
pub async fn health(
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceToken>>>>,
) -> Json<Value> {
    let pending = shared_state
        .lock()
        .await
        .as_ref()
        .filter(|pkce| pkce.token.is_none())
        .map(|pkce| pkce.provider.key());

    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "pending_authorization": pending,
    }))
}
