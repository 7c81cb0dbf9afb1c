//! Nearest-neighbor passage selection
//!
//! The segmentation is deliberately naive: a literal split on `.`, empty
//! passages and all. Improving it would change every observable answer, so
//! the split stays exactly as the service has always behaved. The delimiter
//! is never re-appended; a passage keeps whatever surrounding whitespace the
//! split left it with.

use crate::error::{Error, Result};
use crate::retrieval::embedding::Embedder;
use std::sync::Arc;
use tracing::debug;

/// Selects the stored passage most similar to a question
#[derive(Clone)]
pub struct RetrievalEngine {
    embedder: Arc<dyn Embedder>,
}

impl RetrievalEngine {
    /// Create an engine over an embedding backend
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        RetrievalEngine { embedder }
    }

    /// Answer a question with the passage of maximum cosine similarity.
    ///
    /// Empty content short-circuits to an empty answer without touching the
    /// model. Ties go to the earliest passage.
    pub async fn answer(&self, content: &str, question: &str) -> Result<String> {
        if content.is_empty() {
            return Ok(String::new());
        }

        let passages: Vec<String> = split_passages(content)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut texts = passages.clone();
        texts.push(question.to_string());
        let mut embeddings = self.embedder.embed(texts).await?;

        // Last vector is the question; the rest line up with `passages`.
        let question_embedding = embeddings
            .pop()
            .ok_or_else(|| Error::Retrieval("embedding backend returned no vectors".to_string()))?;

        let best = select_most_similar(&question_embedding, &embeddings);
        debug!(
            passages = passages.len(),
            selected = best,
            "ranked passages for question"
        );

        Ok(passages[best].clone())
    }
}

/// Split content on the literal `.` delimiter, preserving order and empties
pub fn split_passages(content: &str) -> Vec<&str> {
    content.split('.').collect()
}

/// Index of the passage vector most similar to the query, lowest index on ties
fn select_most_similar(query: &[f32], passages: &[Vec<f32>]) -> usize {
    let mut best_index = 0;
    let mut best_score = f32::NEG_INFINITY;

    for (i, passage) in passages.iter().enumerate() {
        let score = cosine_similarity(query, passage);
        // Strict comparison keeps the first occurrence among equal scores,
        // and a NaN score never displaces a real one.
        if score > best_score {
            best_score = score;
            best_index = i;
        }
    }

    best_index
}

/// Cosine of the angle between two vectors; 0.0 when either has no magnitude
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
