//! # Docuchat
//!
//! A minimal document ingestion and question-answering backend built with Rust.
//!
//! ## Features
//!
//! - **URL Ingestion:** Fetch a page and strip it down to readable text
//! - **PDF Ingestion:** Extract text from uploaded PDF documents
//! - **Local Embeddings:** fastembed all-MiniLM-L6-v2, no API key required
//! - **Nearest-Neighbor Answers:** Cosine similarity over naive sentence splits
//! - **In-Memory Store:** Process-lifetime document map, last write wins

pub mod error;
pub mod extract;
pub mod retrieval;
pub mod server;
pub mod store;

pub use error::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = env!("CARGO_PKG_NAME");
