//! Files on a public cloud share.

use super::strategy::{Extracted, FetchRequest, FetchStrategy};
use super::url::{decode_id, GenericUrlStrategy};
use crate::error::Result;
use crate::source::Provider;

/// Appends the id to the public share base and fetches it as a plain URL.
#[derive(Debug, Clone)]
pub struct CloudShareStrategy {
    base: String,
    url: GenericUrlStrategy,
}

impl CloudShareStrategy {
    /// Create the strategy for a share base such as `https://dl.dropboxusercontent.com/u/`.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            url: GenericUrlStrategy::new(),
        }
    }
}

impl FetchStrategy for CloudShareStrategy {
    fn provider(&self) -> Provider {
        Provider::CloudShareFile
    }

    fn build_request(&self, id: &str) -> Result<FetchRequest> {
        let url = format!("{}{}", self.base, decode_id(id)?);
        Ok(self.url.request_for_url(url))
    }

    fn extract(&self, id: &str, request: &FetchRequest, body: &str) -> Result<Extracted> {
        self.url.extract(id, request, body)
    }
}
