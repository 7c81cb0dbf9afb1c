//! Content extractors - URL and PDF to plain text
//!
//! Each extractor is invoked once per ingestion request and returns a single
//! extracted string. The store receives that string as-is; no validation or
//! sanitization happens between extraction and storage.

pub mod pdf;
pub mod web;

pub use web::WebExtractor;
