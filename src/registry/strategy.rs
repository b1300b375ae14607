//! The shared capability interface of every provider.

use crate::error::Result;
use crate::source::Provider;

/// An immutable description of one provider request.
///
/// The URL already carries any query parameters, so it doubles as the
/// canonical URL reported to callers and in errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Target URL.
    pub url: String,
    /// Extra headers (name, value).
    pub headers: Vec<(String, String)>,
    /// Basic auth (user, password).
    pub basic_auth: Option<(String, Option<String>)>,
}

impl FetchRequest {
    /// A plain GET for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            basic_auth: None,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set basic auth credentials.
    pub fn with_basic_auth(mut self, auth: Option<(String, Option<String>)>) -> Self {
        self.basic_auth = auth;
        self
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Content pulled out of a provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Raw document text.
    pub content: String,
    /// Base URL for relative assets (images) referenced by the content.
    pub asset_base: Option<String>,
}

impl Extracted {
    /// Content with no asset base.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            asset_base: None,
        }
    }
}

/// Knows how one provider is addressed and how its responses are shaped.
pub trait FetchStrategy: Send + Sync {
    /// The provider this strategy serves.
    fn provider(&self) -> Provider;

    /// Build the request for a normalized id.
    ///
    /// Malformed ids fail here with `InvalidIdentifier`, before any I/O.
    fn build_request(&self, id: &str) -> Result<FetchRequest>;

    /// Extract the document from a successful response body.
    ///
    /// `id` and `request` are the ones the body was fetched for.
    fn extract(&self, id: &str, request: &FetchRequest, body: &str) -> Result<Extracted>;
}
