//! Flat-file persistence for a collection stored as one JSON array.
//!
//! Reads never fail: a missing file is an empty collection and a malformed
//! one is logged and treated as empty. Writes overwrite the whole file.

use std::{io, path::Path};

use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use crate::errors::StoreError;

enum ReadOutcome {
    Missing,
    Loaded(Vec<Value>),
    Unreadable,
}

async fn read_array(path: &Path) -> ReadOutcome {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return ReadOutcome::Missing,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read collection file; treating as empty");
            return ReadOutcome::Unreadable;
        }
    };
    match serde_json::from_slice::<Vec<Value>>(&bytes) {
        Ok(records) => ReadOutcome::Loaded(records),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "collection file is not a JSON array; treating as empty");
            ReadOutcome::Unreadable
        }
    }
}

/// Load the array at `primary`, or at `fallback` when `primary` does not exist.
///
/// A primary file that exists but cannot be parsed does not fall through to
/// the fallback; it loads as empty.
pub async fn load(primary: &Path, fallback: Option<&Path>) -> Vec<Value> {
    match read_array(primary).await {
        ReadOutcome::Loaded(records) => return records,
        ReadOutcome::Unreadable => return Vec::new(),
        ReadOutcome::Missing => {}
    }
    let Some(fallback) = fallback else {
        debug!(path = %primary.display(), "collection file missing; empty collection");
        return Vec::new();
    };
    match read_array(fallback).await {
        ReadOutcome::Loaded(records) => {
            debug!(path = %fallback.display(), "loaded collection from fallback path");
            records
        }
        ReadOutcome::Missing | ReadOutcome::Unreadable => Vec::new(),
    }
}

/// Push `record` to the end of `collection`.
pub fn append(mut collection: Vec<Value>, record: Value) -> Vec<Value> {
    collection.push(record);
    collection
}

/// Overwrite `path` with `records` as a 2-space indented JSON array.
///
/// The parent directory must already exist.
pub async fn persist(path: &Path, records: &[Value]) -> Result<(), StoreError> {
    let data = serde_json::to_string_pretty(records)?;
    fs::write(path, data)
        .await
        .map_err(|source| StoreError::Write { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), records = records.len(), "collection persisted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn tmp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("json_array_store_{tag}_{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn persist_then_load_returns_appended_collection() -> Result<(), anyhow::Error> {
        let dir = tmp_dir("roundtrip");
        fs::create_dir_all(&dir).await?;
        let path = dir.join("projects.json");

        let existing = vec![json!({"title": "a"}), json!({"title": "b", "tags": ["x"]})];
        let expected = append(existing, json!({"title": "c"}));
        persist(&path, &expected).await?;

        assert_eq!(load(&path, None).await, expected);

        let _ = fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn persist_writes_two_space_indentation() -> Result<(), anyhow::Error> {
        let dir = tmp_dir("indent");
        fs::create_dir_all(&dir).await?;
        let path = dir.join("skills.json");

        persist(&path, &[json!({"name": "Go"})]).await?;
        let text = fs::read_to_string(&path).await?;
        assert_eq!(text, "[\n  {\n    \"name\": \"Go\"\n  }\n]");

        let _ = fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tmp_dir("missing");
        assert!(load(&dir.join("skills.json"), None).await.is_empty());
        assert!(load(&dir.join("skills.json"), Some(&dir.join("other.json"))).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_loads_empty() -> Result<(), anyhow::Error> {
        let dir = tmp_dir("malformed");
        fs::create_dir_all(&dir).await?;
        let broken = dir.join("broken.json");
        fs::write(&broken, b"[{\"name\": ").await?;
        assert!(load(&broken, None).await.is_empty());

        // valid JSON, wrong shape
        let object = dir.join("object.json");
        fs::write(&object, b"{\"name\": \"Go\"}").await?;
        assert!(load(&object, None).await.is_empty());

        let _ = fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn fallback_used_only_when_primary_missing() -> Result<(), anyhow::Error> {
        let dir = tmp_dir("fallback");
        fs::create_dir_all(&dir).await?;
        let primary = dir.join("primary.json");
        let fallback = dir.join("fallback.json");
        persist(&fallback, &[json!({"from": "fallback"})]).await?;

        assert_eq!(load(&primary, Some(&fallback)).await, vec![json!({"from": "fallback"})]);

        persist(&primary, &[json!({"from": "primary"})]).await?;
        assert_eq!(load(&primary, Some(&fallback)).await, vec![json!({"from": "primary"})]);

        // a corrupt primary does not fall through
        fs::write(&primary, b"not json").await?;
        assert!(load(&primary, Some(&fallback)).await.is_empty());

        let _ = fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn persist_into_missing_directory_fails() {
        let path = tmp_dir("nodir").join("skills.json");
        let err = persist(&path, &[json!({"name": "Go"})]).await.unwrap_err();
        match err {
            StoreError::Write { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn rewrite_keeps_record_key_order() -> Result<(), anyhow::Error> {
        let dir = tmp_dir("keyorder");
        fs::create_dir_all(&dir).await?;
        let path = dir.join("skills.json");
        fs::write(&path, br#"[{"name":"Rust","level":"expert"}]"#).await?;

        let record: Value = serde_json::from_str(r#"{"name":"Go","level":"basic"}"#)?;
        let updated = append(load(&path, None).await, record);
        persist(&path, &updated).await?;

        let text = fs::read_to_string(&path).await?;
        assert_eq!(
            text,
            "[\n  {\n    \"name\": \"Rust\",\n    \"level\": \"expert\"\n  },\n  {\n    \"name\": \"Go\",\n    \"level\": \"basic\"\n  }\n]"
        );

        let _ = fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[test]
    fn append_keeps_order() {
        let c = append(vec![json!(1), json!(2)], json!(3));
        assert_eq!(c, vec![json!(1), json!(2), json!(3)]);
    }
}
