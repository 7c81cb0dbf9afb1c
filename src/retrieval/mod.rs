//! Retrieval module - passage segmentation, embedding, similarity ranking
//!
//! Splits stored text into passages, embeds passages and question with a
//! local sentence-embedding model (fastembed), and answers with the passage
//! of maximum cosine similarity.

pub mod embedding;
pub mod engine;

pub use embedding::{Embedder, EmbeddingService};
pub use engine::RetrievalEngine;
