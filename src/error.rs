//! Error types for Docuchat

use thiserror::Error;

/// Result type alias using Docuchat's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Docuchat
#[derive(Error, Debug)]
pub enum Error {
    /// URL unreachable or the response carried no usable text
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// PDF unreadable or contained no extractable text
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Unknown document identifier
    #[error("{0}")]
    NotFound(String),

    /// Unexpected fault during embedding or similarity scoring
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Malformed request payload
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Check if error is a client error (user's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::NotFound(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_client_error() {
        assert!(Error::NotFound("Chat ID not found.".into()).is_client_error());
        assert!(!Error::Fetch("connection refused".into()).is_client_error());
    }

    #[test]
    fn test_not_found_display_is_bare_detail() {
        // The HTTP layer forwards this text verbatim as the 404 detail.
        let err = Error::NotFound("Chat ID not found.".into());
        assert_eq!(err.to_string(), "Chat ID not found.");
    }
}
