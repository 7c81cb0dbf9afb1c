//! PDF to text extraction
//!
//! Runs pdf-extract over the uploaded bytes and returns the document's text
//! with all pages concatenated. An unreadable document, or one yielding no
//! text at all, is an extraction failure rather than an empty store entry.

use crate::error::{Error, Result};
use tracing::debug;

/// Extract the text of an uploaded PDF
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| Error::Extraction(format!("failed to read {filename}: {e}")))?;

    if text.trim().is_empty() {
        return Err(Error::Extraction(format!(
            "{filename} contained no extractable text"
        )));
    }

    debug!(filename, chars = text.len(), "extracted pdf text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_is_extraction_error() {
        let err = extract_text("bogus.pdf", b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(err.to_string().contains("bogus.pdf"));
    }

    #[test]
    fn test_empty_upload_is_extraction_error() {
        let err = extract_text("empty.pdf", b"").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }
}
