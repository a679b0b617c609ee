use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::collections::CollectionKind;
use crate::errors::StoreError;
use crate::storage::{json_array_store, CollectionStore, DataLayout};

/// Collections persisted as `<data_dir>/<collection>.json`.
///
/// Reads consult the fallback directory when the primary file is absent;
/// writes always go to the primary directory.
#[derive(Clone, Debug)]
pub struct FileCollectionStore {
    layout: DataLayout,
}

impl FileCollectionStore {
    /// Store over the given data layout; nothing is read until the first `load`.
    pub fn new(layout: DataLayout) -> Arc<Self> {
        Arc::new(Self { layout })
    }
}

#[async_trait]
impl CollectionStore for FileCollectionStore {
    /// Read `<primary>/<file>`, then `<fallback>/<file>` if the primary is missing.
    async fn load(&self, kind: CollectionKind) -> Vec<Value> {
        let primary = self.layout.primary_path(kind);
        let fallback = self.layout.fallback_path(kind);
        json_array_store::load(&primary, fallback.as_deref()).await
    }

    /// Overwrite `<primary>/<file>`.
    async fn persist(&self, kind: CollectionKind, records: &[Value]) -> Result<(), StoreError> {
        json_array_store::persist(&self.layout.primary_path(kind), records).await
    }
}
