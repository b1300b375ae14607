//! Snippets served from the local content base.

use super::strategy::{Extracted, FetchRequest, FetchStrategy};
use super::url::GenericUrlStrategy;
use crate::error::Result;
use crate::source::Provider;

/// Maps `name` to `<base>name<suffix>` and fetches it as a plain URL.
#[derive(Debug, Clone)]
pub struct LocalSnippetStrategy {
    base: String,
    suffix: String,
    url: GenericUrlStrategy,
}

impl LocalSnippetStrategy {
    /// Create the strategy.
    pub fn new(base: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            suffix: suffix.into(),
            url: GenericUrlStrategy::new(),
        }
    }
}

impl FetchStrategy for LocalSnippetStrategy {
    fn provider(&self) -> Provider {
        Provider::LocalSnippet
    }

    fn build_request(&self, id: &str) -> Result<FetchRequest> {
        let url = format!("{}{}{}", self.base, id, self.suffix);
        Ok(self.url.request_for_url(url))
    }

    fn extract(&self, id: &str, request: &FetchRequest, body: &str) -> Result<Extracted> {
        self.url.extract(id, request, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_base_and_suffix() {
        let s = LocalSnippetStrategy::new("http://gist.neo4j.org/gists/", ".adoc");
        let req = s.build_request("movies").unwrap();

        assert_eq!(req.url, "http://gist.neo4j.org/gists/movies.adoc");
        assert_eq!(req.header("Accept"), Some("text/plain"));
    }

    #[test]
    fn empty_suffix_is_allowed() {
        let s = LocalSnippetStrategy::new("http://snippets/", "");
        let req = s.build_request("intro.txt").unwrap();
        assert_eq!(req.url, "http://snippets/intro.txt");
    }
}
