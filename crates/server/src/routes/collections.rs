//! Handlers for `/api/{collection}`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use service::CollectionKind;
use tracing::debug;

use super::ServerState;
use crate::errors::ApiError;

/// Resolve the path segment to a known collection, 404 otherwise.
fn parse_kind(name: &str) -> Result<CollectionKind, ApiError> {
    name.parse::<CollectionKind>()
        .map_err(|e| ApiError::UnknownCollection(e.to_string()))
}

/// GET: the whole collection, `[]` when nothing has been stored yet.
pub async fn list(
    State(state): State<ServerState>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let kind = parse_kind(&collection)?;
    Ok(Json(state.collections.list(kind).await))
}

/// POST: append one record and echo it back under its singular name.
pub async fn create(
    State(state): State<ServerState>,
    Path(collection): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let kind = parse_kind(&collection)?;
    let record: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;
    let stored = state.collections.create(kind, record).await?;

    let mut out = Map::new();
    out.insert("message".into(), Value::String(kind.created_message()));
    out.insert(kind.singular().into(), stored);
    Ok(Json(Value::Object(out)))
}

/// OPTIONS: 200 with an empty body. Behind the CORS layer, preflights are answered before reaching here.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other verb (HEAD, PUT, DELETE, ...): 405 without touching the store.
pub async fn method_not_allowed(Path(collection): Path<String>) -> ApiError {
    debug!(%collection, "unsupported method");
    ApiError::MethodNotAllowed
}
