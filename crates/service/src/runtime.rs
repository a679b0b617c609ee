//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

use std::path::Path;

/// Ensure the data directory exists; warn on a missing static dir.
pub async fn ensure_env(static_dir: Option<&Path>, data_dir: &Path) -> anyhow::Result<()> {
    common::env::ensure_env(static_dir, data_dir).await
}
