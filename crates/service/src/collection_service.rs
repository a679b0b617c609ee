use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::collections::CollectionKind;
use crate::errors::ServiceError;
use crate::storage::{json_array_store, CollectionStore};

/// List and append records of the portfolio collections.
///
/// Creates are serialized within the process so concurrent requests cannot
/// drop each other's record. Other processes writing the same files still race.
#[derive(Clone)]
pub struct CollectionService {
    store: Arc<dyn CollectionStore>,
    write_lock: Arc<Mutex<()>>,
}

impl CollectionService {
    /// Service over any `CollectionStore` (file-backed in production, in-memory in tests).
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store, write_lock: Arc::new(Mutex::new(())) }
    }

    /// All records of `kind` in insertion order; empty when nothing is stored.
    pub async fn list(&self, kind: CollectionKind) -> Vec<Value> {
        self.store.load(kind).await
    }

    /// Append `record` to `kind` and persist; returns the stored record.
    pub async fn create(&self, kind: CollectionKind, record: Value) -> Result<Value, ServiceError> {
        if !record.is_object() {
            return Err(ServiceError::Validation("record must be a JSON object".into()));
        }

        let _guard = self.write_lock.lock().await;
        let current = self.store.load(kind).await;
        let updated = json_array_store::append(current, record.clone());
        if let Err(e) = self.store.persist(kind, &updated).await {
            error!(collection = %kind, error = %e, "failed to persist collection");
            return Err(e.into());
        }
        info!(collection = %kind, records = updated.len(), "record added");
        Ok(record)
    }
}
