//! URL to text extraction
//!
//! Fetches a page over HTTP and reduces the HTML to readable text: every
//! text node is trimmed and the non-empty ones are joined with single
//! spaces. Script and style bodies count as text nodes, matching the
//! whole-document extraction this service has always exposed.

use crate::error::Result;
use scraper::Html;
use tracing::debug;

/// Fetches URLs and strips their markup
#[derive(Clone)]
pub struct WebExtractor {
    client: reqwest::Client,
}

impl WebExtractor {
    /// Create an extractor with a fresh HTTP client
    pub fn new() -> Self {
        WebExtractor {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch a URL and return its readable text
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        let text = html_to_text(&body);
        debug!(url, chars = text.len(), "extracted page text");
        Ok(text)
    }
}

impl Default for WebExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce an HTML document to its text nodes, space-joined and trimmed
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let chunks: Vec<&str> = document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect();
    chunks.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_html_to_text_joins_nodes_with_spaces() {
        let html = "<html><body><h1>Title</h1><p>First line.</p>\n<p>Second   line.</p></body></html>";
        assert_eq!(html_to_text(html), "Title First line. Second   line.");
    }

    #[test]
    fn test_html_to_text_skips_whitespace_only_nodes() {
        let html = "<div>  <span>a</span> \n\t <span>b</span>  </div>";
        assert_eq!(html_to_text(html), "a b");
    }

    #[test]
    fn test_html_to_text_plain_text_passthrough() {
        assert_eq!(html_to_text("just words"), "just words");
    }

    #[tokio::test]
    async fn test_fetch_text_extracts_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><body><p>The sky is blue.</p><p>Water is wet.</p></body></html>",
            ))
            .mount(&server)
            .await;

        let extractor = WebExtractor::new();
        let text = extractor
            .fetch_text(&format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(text, "The sky is blue. Water is wet.");
    }

    #[tokio::test]
    async fn test_fetch_text_non_success_status_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let extractor = WebExtractor::new();
        let err = extractor
            .fetch_text(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }
}
