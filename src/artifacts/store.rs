//! In-memory artifact store
//!
//! Records are kept in insertion order in a `Vec`, with a `HashMap` index from
//! id to position. Both sit behind one `tokio::sync::RwLock`, so an insert is
//! either fully visible or not visible at all.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Field holding the server-generated identifier
pub const ID_FIELD: &str = "id";

/// Field holding the insertion timestamp
pub const CREATED_AT_FIELD: &str = "created_at";

/// A stored record: the caller's fields plus `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Artifact(Map<String, Value>);

impl Artifact {
    /// Server-generated identifier
    pub fn id(&self) -> &str {
        self.0.get(ID_FIELD).and_then(Value::as_str).unwrap_or_default()
    }

    /// Insertion timestamp (ISO-8601 UTC)
    pub fn created_at(&self) -> &str {
        self.0
            .get(CREATED_AT_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct Inner {
    items: Vec<Artifact>,
    index: HashMap<String, usize>,
}

/// Process-lifetime store for artifacts
///
/// Growth is unbounded: there is no eviction, update or delete.
pub struct ArtifactStore {
    inner: Arc<RwLock<Inner>>,
}

impl ArtifactStore {
    /// Create a new empty artifact store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    /// Stamp `record` with a fresh id and timestamp and store it.
    ///
    /// Caller-supplied `id` / `created_at` fields are overwritten.
    pub async fn add(&self, mut record: Map<String, Value>) -> Artifact {
        let id = Uuid::new_v4().to_string();
        record.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        record.insert(
            CREATED_AT_FIELD.to_string(),
            Value::String(crate::utc_now_iso()),
        );
        let artifact = Artifact(record);

        {
            let mut inner = self.inner.write().await;
            let position = inner.items.len();
            inner.items.push(artifact.clone());
            inner.index.insert(id.clone(), position);
        }

        tracing::info!(
            artifact_id = %artifact.id(),
            created_at = %artifact.created_at(),
            "Artifact stored"
        );
        artifact
    }

    /// All artifacts in insertion order
    pub async fn list(&self) -> Vec<Artifact> {
        self.inner.read().await.items.clone()
    }

    /// Get an artifact by id
    pub async fn get(&self, id: &str) -> Result<Artifact> {
        let inner = self.inner.read().await;
        match inner.index.get(id) {
            Some(&position) => Ok(inner.items[position].clone()),
            None => {
                tracing::debug!(artifact_id = %id, "Artifact lookup missed");
                Err(Error::ArtifactNotFound(id.to_string()))
            }
        }
    }

    /// Number of stored artifacts
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let store = ArtifactStore::new();
        let saved = store.add(object(json!({"x": 1}))).await;

        assert!(Uuid::parse_str(saved.id()).is_ok());
        assert!(saved.created_at().ends_with('Z'));

        let fetched = store.get(saved.id()).await.unwrap();
        assert_eq!(fetched, saved);
        assert_eq!(
            serde_json::to_value(&fetched).unwrap(),
            json!({"x": 1, "id": saved.id(), "created_at": saved.created_at()})
        );
    }

    #[tokio::test]
    async fn test_add_overwrites_caller_id_and_created_at() {
        let store = ArtifactStore::new();
        let saved = store
            .add(object(json!({"id": "mine", "created_at": "1999", "title": "Bridge"})))
            .await;

        assert_ne!(saved.id(), "mine");
        assert_ne!(saved.created_at(), "1999");
        assert_eq!(saved.0.get("title"), Some(&json!("Bridge")));
        assert!(matches!(
            store.get("mine").await,
            Err(Error::ArtifactNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let store = ArtifactStore::new();
        let err = store.get("nonexistent").await.unwrap_err();
        assert!(matches!(err, Error::ArtifactNotFound(ref id) if id == "nonexistent"));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = ArtifactStore::new();
        assert!(store.is_empty().await);

        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(store.add(object(json!({"n": i}))).await.id().to_string());
        }

        let listed: Vec<String> = store
            .list()
            .await
            .iter()
            .map(|a| a.id().to_string())
            .collect();
        assert_eq!(listed, ids);
        assert_eq!(store.len().await, 5);
    }

    #[tokio::test]
    async fn test_nested_payload_kept_verbatim() {
        let store = ArtifactStore::new();
        let payload = json!({
            "thread": {"title": "Salt wind archive", "support_level": "likely"},
            "tags": ["coast", 3, null],
        });
        let saved = store.add(object(payload.clone())).await;
        assert_eq!(saved.0.get("thread"), payload.get("thread"));
        assert_eq!(saved.0.get("tags"), payload.get("tags"));
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let store = Arc::new(ArtifactStore::new());
        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.add(object(json!({"n": i}))).await })
            })
            .collect();

        let saved: Vec<Artifact> = futures::future::join_all(tasks)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        let ids: std::collections::HashSet<&str> = saved.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), 64);
        assert_eq!(store.list().await.len(), 64);
        for artifact in &saved {
            assert!(store.get(artifact.id()).await.is_ok());
        }
    }
}
