//! Arbitrary URLs.

use super::strategy::{Extracted, FetchRequest, FetchStrategy};
use crate::error::{GistError, Result};
use crate::source::Provider;

/// Fetches a URL given directly as the id. The body is the document.
#[derive(Debug, Clone, Default)]
pub struct GenericUrlStrategy;

impl GenericUrlStrategy {
    /// Create the strategy.
    pub fn new() -> Self {
        Self
    }

    /// Request for an already-decoded URL.
    pub fn request_for_url(&self, url: impl Into<String>) -> FetchRequest {
        FetchRequest::get(url).with_header("Accept", "text/plain")
    }
}

impl FetchStrategy for GenericUrlStrategy {
    fn provider(&self) -> Provider {
        Provider::GenericUrl
    }

    fn build_request(&self, id: &str) -> Result<FetchRequest> {
        Ok(self.request_for_url(decode_id(id)?))
    }

    fn extract(&self, _id: &str, _request: &FetchRequest, body: &str) -> Result<Extracted> {
        Ok(Extracted::text(body))
    }
}

/// Percent-decode an id.
pub fn decode_id(id: &str) -> Result<String> {
    urlencoding::decode(id)
        .map(|s| s.into_owned())
        .map_err(|e| GistError::InvalidIdentifier {
            id: id.to_string(),
            reason: format!("not valid UTF-8 after decoding: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_decoded_into_url() {
        let strategy = GenericUrlStrategy::new();
        let req = strategy
            .build_request("https%3A%2F%2Fexample.com%2Fmy%20doc.adoc")
            .unwrap();

        assert_eq!(req.url, "https://example.com/my doc.adoc");
        assert_eq!(req.header("Accept"), Some("text/plain"));
        assert!(req.basic_auth.is_none());
    }

    #[test]
    fn plain_url_passes_through() {
        let strategy = GenericUrlStrategy::new();
        let req = strategy.build_request("http://x/a.adoc").unwrap();
        assert_eq!(req.url, "http://x/a.adoc");
    }

    #[test]
    fn body_is_returned_as_is() {
        let strategy = GenericUrlStrategy::new();
        let req = strategy.build_request("http://x/a.adoc").unwrap();
        let out = strategy.extract("http://x/a.adoc", &req, "= Doc\n\ntext").unwrap();

        assert_eq!(out, Extracted::text("= Doc\n\ntext"));
    }

    #[test]
    fn invalid_utf8_escape_is_invalid_identifier() {
        let err = decode_id("%FF%FE").unwrap_err();
        assert!(matches!(err, GistError::InvalidIdentifier { .. }));
    }
}
