//! Repository file references.
//!
//! A repository-file id looks like `owner/repo//path/to/file.adoc` or
//! `owner/repo/branch//path/to/file.adoc`. The third segment is a separator
//! slot: when the fourth segment is empty, the third one names the branch.
//! A `/contents/` segment (as copied from API URLs) is accepted in place of
//! the `//` separator.

use serde::Serialize;

use crate::error::{GistError, Result};

/// A parsed repository file reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryPath {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch, explicit or defaulted.
    pub branch: String,
    /// File path inside the repository.
    pub path: String,
}

impl RepositoryPath {
    /// Parse a repository-file id, percent-decoding it first.
    pub fn parse(raw: &str, default_branch: &str) -> Result<Self> {
        let decoded = urlencoding::decode(raw).map_err(|e| GistError::InvalidIdentifier {
            id: raw.to_string(),
            reason: format!("not valid UTF-8 after decoding: {}", e),
        })?;
        let decoded = decoded.replace("/contents/", "//");
        let parts: Vec<&str> = decoded.split('/').collect();

        let (branch, path_start) = if parts.len() >= 4 && parts[3].is_empty() {
            (parts[2], 4)
        } else {
            (default_branch, 3)
        };

        let owner = parts.first().copied().unwrap_or_default();
        let repo = parts.get(1).copied().unwrap_or_default();
        let path = parts
            .get(path_start..)
            .map(|rest| rest.join("/"))
            .unwrap_or_default();

        if owner.is_empty() || repo.is_empty() || path.is_empty() || branch.is_empty() {
            return Err(GistError::InvalidIdentifier {
                id: raw.to_string(),
                reason: "expected owner/repo//path or owner/repo/branch//path".to_string(),
            });
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
            path,
        })
    }

    /// Directory part of the file path, with trailing slash (empty at repo root).
    pub fn directory(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[..=idx],
            None => "",
        }
    }
}
