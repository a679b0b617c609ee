use std::path::Path;

use axum::{routing::get, Json, Router};
use service::CollectionService;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use axum::http::{header, Method};
use common::types::Health;

pub mod collections;

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub collections: CollectionService,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `Access-Control-Allow-Origin: *` for GET/POST/OPTIONS with a `Content-Type` header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the application router: health, collection API and optional static assets.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route(
            "/api/:collection",
            get(collections::list)
                .post(collections::create)
                .options(collections::preflight)
                .head(collections::method_not_allowed)
                .fallback(collections::method_not_allowed),
        )
        .with_state(state);

    let mut app = Router::new().route("/health", get(health)).merge(api);

    if let Some(dir) = static_dir {
        let assets = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        app = app.fallback_service(assets);
    }

    app.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            )
            .layer(cors),
    )
}
