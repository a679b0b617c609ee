use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::{
    file::collection_store::FileCollectionStore,
    runtime,
    storage::DataLayout,
    CollectionService,
};

/// Data layout from the `[storage]` section.
pub fn data_layout(cfg: &AppConfig) -> DataLayout {
    let layout = DataLayout::new(cfg.storage.data_dir.clone());
    match &cfg.storage.fallback_dir {
        Some(dir) => layout.with_fallback(dir.clone()),
        None => layout,
    }
}

/// Build the full application from config: file-backed store, router, CORS and tracing.
pub fn build_app(cfg: &AppConfig) -> Router {
    let store = FileCollectionStore::new(data_layout(cfg));
    let state = ServerState { collections: CollectionService::new(store) };
    routes::build_router(state, routes::build_cors(), cfg.server.static_dir.as_deref())
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

/// Public entry: prepare directories, bind, and run the HTTP server
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    runtime::ensure_env(cfg.server.static_dir.as_deref(), &cfg.storage.data_dir)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let app = build_app(&cfg);

    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await.map_err(anyhow::Error::from)?;
    info!(
        %addr,
        data_dir = %cfg.storage.data_dir.display(),
        fallback_dir = ?cfg.storage.fallback_dir,
        "portfolio api listening"
    );
    axum::serve(listener, app).await.map_err(anyhow::Error::from)?;
    Ok(())
}
