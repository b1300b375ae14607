//! Files inside a source repository, read through the contents API.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;

use super::strategy::{Extracted, FetchRequest, FetchStrategy};
use crate::config::Credentials;
use crate::error::{GistError, Result};
use crate::source::{Provider, RepositoryPath};

/// Fetches `owner/repo[/branch/]/path` through the repository contents API.
#[derive(Debug, Clone)]
pub struct RepositoryFileStrategy {
    api_base: String,
    raw_base: String,
    default_branch: String,
    credentials: Credentials,
}

/// The parts of a contents API response we read.
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: Option<String>,
    path: Option<String>,
    name: Option<String>,
}

impl RepositoryFileStrategy {
    /// Create the strategy.
    pub fn new(
        api_base: impl Into<String>,
        raw_base: impl Into<String>,
        default_branch: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            raw_base: raw_base.into(),
            default_branch: default_branch.into(),
            credentials,
        }
    }

    fn asset_base(&self, repo: &RepositoryPath, response: &ContentsResponse) -> String {
        let directory = match (&response.path, &response.name) {
            (Some(path), Some(name)) if path.ends_with(name.as_str()) => {
                path[..path.len() - name.len()].to_string()
            }
            _ => repo.directory().to_string(),
        };

        format!(
            "{}{}/{}/{}/{}",
            self.raw_base, repo.owner, repo.repo, repo.branch, directory
        )
    }
}

impl FetchStrategy for RepositoryFileStrategy {
    fn provider(&self) -> Provider {
        Provider::RepositoryFile
    }

    fn build_request(&self, id: &str) -> Result<FetchRequest> {
        let repo = RepositoryPath::parse(id, &self.default_branch)?;
        let url = format!(
            "{}{}/{}/contents/{}?ref={}",
            self.api_base,
            repo.owner,
            repo.repo,
            repo.path,
            urlencoding::encode(&repo.branch)
        );

        Ok(FetchRequest::get(url)
            .with_header("Accept", "application/json")
            .with_basic_auth(self.credentials.basic_auth()))
    }

    fn extract(&self, id: &str, request: &FetchRequest, body: &str) -> Result<Extracted> {
        let shape_error = |message: String| GistError::ProviderShape {
            url: request.url.clone(),
            message,
        };

        let repo = RepositoryPath::parse(id, &self.default_branch)?;
        let response: ContentsResponse = serde_json::from_str(body)
            .map_err(|e| shape_error(format!("invalid JSON: {}", e)))?;

        let encoded = response
            .content
            .as_deref()
            .ok_or_else(|| shape_error("response has no content field".to_string()))?;

        // The API wraps base64 at 60 columns.
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| shape_error(format!("content is not base64: {}", e)))?;
        let content = String::from_utf8(bytes)
            .map_err(|e| shape_error(format!("content is not UTF-8: {}", e)))?;

        Ok(Extracted {
            content,
            asset_base: Some(self.asset_base(&repo, &response)),
        })
    }
}
