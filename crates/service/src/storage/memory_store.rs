use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::collections::CollectionKind;
use crate::errors::StoreError;
use crate::storage::CollectionStore;

/// In-process collection store; nothing touches the disk.
#[derive(Clone, Default)]
pub struct MemoryCollectionStore {
    inner: Arc<RwLock<HashMap<CollectionKind, Vec<Value>>>>,
}

impl MemoryCollectionStore {
    /// Empty store with no collections.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Pre-populate a collection.
    pub async fn seed(&self, kind: CollectionKind, records: Vec<Value>) {
        self.inner.write().await.insert(kind, records);
    }
}

#[async_trait]
impl CollectionStore for MemoryCollectionStore {
    /// Clone of the stored records, empty if never persisted.
    async fn load(&self, kind: CollectionKind) -> Vec<Value> {
        let map = self.inner.read().await;
        map.get(&kind).cloned().unwrap_or_default()
    }

    /// Replace the records of `kind`.
    async fn persist(&self, kind: CollectionKind, records: &[Value]) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        map.insert(kind, records.to_vec());
        Ok(())
    }
}
