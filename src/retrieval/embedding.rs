//! Local embedding generation via fastembed
//!
//! Uses the all-MiniLM-L6-v2 model (384 dimensions, ~80MB).
//! Model auto-downloads on first use.

use crate::error::{Error, Result};
use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::sync::Arc;

/// Anything that can embed a batch of texts into a shared vector space
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed each text into a fixed-dimension vector, preserving order
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>>;
}

/// Local embedding service wrapping fastembed
#[derive(Clone)]
pub struct EmbeddingService {
    model: Arc<TextEmbedding>,
}

impl EmbeddingService {
    /// Create a new embedding service with all-MiniLM-L6-v2
    pub fn new() -> Result<Self> {
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(true),
        )
        .map_err(|e| Error::Internal(format!("Failed to init embedding model: {}", e)))?;

        Ok(EmbeddingService {
            model: Arc::new(model),
        })
    }

    /// Get the embedding dimensions (384 for all-MiniLM-L6-v2)
    pub fn dimensions(&self) -> usize {
        384
    }
}

#[async_trait]
impl Embedder for EmbeddingService {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        let model = self.model.clone();

        tokio::task::spawn_blocking(move || {
            model
                .embed(texts, None)
                .map_err(|e| Error::Retrieval(format!("Embedding error: {}", e)))
        })
        .await
        .map_err(|e| Error::Retrieval(format!("Embedding task join error: {}", e)))?
    }
}
