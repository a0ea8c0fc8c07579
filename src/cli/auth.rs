use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{Res, info, management::Provider, types::PkceToken};

pub async fn auth(provider: Provider) -> Res<()> {
    info!("Authorizing with {}...", provider);
    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
    crate::auth::auth(provider, shared_state).await
}
