//! Hosted gists, addressed by short hex id.

use serde_json::Value;

use super::strategy::{Extracted, FetchRequest, FetchStrategy};
use crate::config::Credentials;
use crate::error::{GistError, Result};
use crate::source::{is_gist_id, Provider};

/// Fetches a gist through the hosted-gist API and returns its first file.
#[derive(Debug, Clone)]
pub struct HostedGistStrategy {
    api_base: String,
    credentials: Credentials,
}

impl HostedGistStrategy {
    /// Create the strategy for an API base such as `https://api.github.com/gists/`.
    pub fn new(api_base: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            api_base: api_base.into(),
            credentials,
        }
    }
}

impl FetchStrategy for HostedGistStrategy {
    fn provider(&self) -> Provider {
        Provider::HostedGist
    }

    fn build_request(&self, id: &str) -> Result<FetchRequest> {
        if !is_gist_id(id) {
            return Err(GistError::InvalidIdentifier {
                id: id.to_string(),
                reason: "The gist id is malformed".to_string(),
            });
        }

        let url = format!("{}{}", self.api_base, id.replace('/', ""));
        Ok(FetchRequest::get(url)
            .with_header("Accept", "application/json")
            .with_basic_auth(self.credentials.basic_auth()))
    }

    fn extract(&self, _id: &str, request: &FetchRequest, body: &str) -> Result<Extracted> {
        let shape_error = |message: &str| GistError::ProviderShape {
            url: request.url.clone(),
            message: message.to_string(),
        };

        let json: Value =
            serde_json::from_str(body).map_err(|e| shape_error(&format!("invalid JSON: {}", e)))?;

        // Document order; serde_json is built with preserve_order.
        let (name, file) = json
            .get("files")
            .and_then(Value::as_object)
            .and_then(|files| files.iter().next())
            .ok_or_else(|| shape_error("gist has no files"))?;

        let content = file
            .get("content")
            .and_then(Value::as_str)
            .ok_or_else(|| shape_error(&format!("file '{}' has no content", name)))?;

        tracing::debug!("Extracted gist file '{}' from {}", name, request.url);
        Ok(Extracted::text(content))
    }
}
