//! In-memory document store
//!
//! Process-wide map from a document identifier (source URL or uploaded
//! filename, verbatim) to its extracted text. No eviction, no size bound,
//! no persistence; entries live until the process exits.
//!
//! The map sits behind a `tokio::sync::RwLock` so concurrent requests get
//! defined semantics: last completed write wins, reads never observe a
//! partially written value.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the document store
#[derive(Clone, Default)]
pub struct DocumentStore {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl DocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        DocumentStore {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store extracted text under an identifier, overwriting any prior entry
    pub async fn put(&self, id: impl Into<String>, text: impl Into<String>) {
        self.documents.write().await.insert(id.into(), text.into());
    }

    /// Fetch the most recently stored text for an identifier
    pub async fn get(&self, id: &str) -> Option<String> {
        self.documents.read().await.get(id).cloned()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the store holds no documents
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_round_trip() {
        let store = DocumentStore::new();
        store.put("https://example.com", "some extracted text").await;
        assert_eq!(
            store.get("https://example.com").await.as_deref(),
            Some("some extracted text")
        );
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = DocumentStore::new();
        assert!(store.get("never-ingested").await.is_none());
    }

    #[tokio::test]
    async fn test_reingest_overwrites() {
        let store = DocumentStore::new();
        assert!(store.is_empty().await);
        store.put("report.pdf", "first version").await;
        store.put("report.pdf", "second version").await;
        assert_eq!(store.get("report.pdf").await.as_deref(), Some("second version"));
        assert_eq!(store.len().await, 1);
        assert!(!store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = DocumentStore::new();
        let other = store.clone();
        store.put("a", "text").await;
        assert_eq!(other.get("a").await.as_deref(), Some("text"));
    }
}
