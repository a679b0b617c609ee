//! Storage abstractions for service layer
//!
//! `json_array_store` holds the flat-file primitives (load/append/persist);
//! `CollectionStore` is the seam the service depends on, with a file-backed
//! implementation in `crate::file` and an in-memory one for tests.

pub mod json_array_store;
pub mod memory_store;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::collections::CollectionKind;
use crate::errors::StoreError;

/// Trait abstraction for collection persistence.
/// Implementations can be file-backed or in-memory.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Current records of `kind`; never fails, an unreadable collection is empty.
    async fn load(&self, kind: CollectionKind) -> Vec<Value>;
    /// Replace the stored records of `kind`.
    async fn persist(&self, kind: CollectionKind, records: &[Value]) -> Result<(), StoreError>;
}

/// Directories holding the collection files, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    pub primary: PathBuf,
    pub fallback: Option<PathBuf>,
}

impl DataLayout {
    /// Layout with only a primary directory.
    pub fn new<P: Into<PathBuf>>(primary: P) -> Self {
        Self { primary: primary.into(), fallback: None }
    }

    /// Add a read-only fallback directory.
    pub fn with_fallback<P: Into<PathBuf>>(mut self, fallback: P) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// `<primary>/<collection>.json`, the only path ever written.
    pub fn primary_path(&self, kind: CollectionKind) -> PathBuf {
        self.primary.join(kind.file_name())
    }

    /// `<fallback>/<collection>.json`, if a fallback is configured.
    pub fn fallback_path(&self, kind: CollectionKind) -> Option<PathBuf> {
        self.fallback.as_deref().map(|dir: &Path| dir.join(kind.file_name()))
    }
}
