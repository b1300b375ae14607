//! Viewer URL inspection.
//!
//! Gists are shared as viewer links such as
//! `http://gist.neo4j.org/?github-HazardJ%2Fgists%2F%2FDoc.adoc`. The query
//! part names the source; [`SourceInfo::parse`] decodes it and works out the
//! human-facing and API URLs without touching the network.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::identifier::{is_gist_id, REPOSITORY_PREFIX, SHARE_PREFIX};
use super::repo_path::RepositoryPath;
use crate::config::ProviderUrls;

static VIEWER_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^http.+?\?(.+)").unwrap());

/// Prefix for private cloud-share links.
pub const SHARED_PREFIX: &str = "dropboxs-";

/// Kind of source a viewer URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Hosted gist.
    GithubGist,
    /// Repository file.
    GithubRepo,
    /// Public cloud-share file.
    DropboxUser,
    /// Private cloud-share link.
    DropboxShared,
    /// Locally hosted snippet.
    Graphgist,
    /// The source is itself a URL.
    Url,
    /// Not a viewer link at all.
    Any,
}

impl SourceKind {
    /// Kebab-case name, as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GithubGist => "github-gist",
            Self::GithubRepo => "github-repo",
            Self::DropboxUser => "dropbox-user",
            Self::DropboxShared => "dropbox-shared",
            Self::Graphgist => "graphgist",
            Self::Url => "url",
            Self::Any => "any",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a viewer URL refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    /// Decoded source reference from the query string.
    pub source: String,
    /// The query string as written, before percent-decoding. For
    /// non-viewer links this is the whole input.
    #[serde(skip)]
    pub query: String,
    /// Source classification.
    pub kind: SourceKind,
    /// Human-facing URL of the source.
    pub url: String,
    /// API URL, for providers that have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Repository coordinates for repository files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryPath>,
}

impl SourceInfo {
    /// Inspect a viewer URL.
    ///
    /// Anything that is not a viewer link is reported as [`SourceKind::Any`]
    /// with the input as its URL.
    pub fn parse(viewer_url: &str, urls: &ProviderUrls) -> Self {
        let Some(query) = VIEWER_URL
            .captures(viewer_url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return Self::simple(viewer_url, viewer_url, SourceKind::Any, viewer_url.to_string());
        };

        let query = match query.find('&') {
            Some(cut) => &query[..cut],
            None => query,
        };
        let source = urlencoding::decode(query)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| query.to_string());

        if source.contains("://") {
            return Self::simple(&source, query, SourceKind::Url, source.clone());
        }

        if is_gist_id(&source) {
            return Self {
                url: format!("{}{}", urls.gist_web, source),
                api_url: Some(format!("{}{}", urls.gist_api, source.replace('/', ""))),
                repository: None,
                kind: SourceKind::GithubGist,
                query: query.to_string(),
                source,
            };
        }

        let lower = source.to_ascii_lowercase();

        if lower.starts_with(REPOSITORY_PREFIX) {
            let reference = &source[REPOSITORY_PREFIX.len()..];
            let repository = RepositoryPath::parse(reference, &urls.default_branch).ok();
            let api_url = repository.as_ref().map(|r| {
                format!(
                    "{}{}/{}/contents/{}",
                    urls.repository_api, r.owner, r.repo, r.path
                )
            });
            return Self {
                url: format!("{}{}", urls.repository_web, reference),
                api_url,
                repository,
                kind: SourceKind::GithubRepo,
                query: query.to_string(),
                source,
            };
        }

        if lower.starts_with(SHARE_PREFIX) {
            let url = format!("{}{}", urls.share_public, &source[SHARE_PREFIX.len()..]);
            return Self::simple(&source, query, SourceKind::DropboxUser, url);
        }

        if lower.starts_with(SHARED_PREFIX) {
            let url = format!("{}{}", urls.share_private, &source[SHARED_PREFIX.len()..]);
            return Self::simple(&source, query, SourceKind::DropboxShared, url);
        }

        let url = format!("{}{}", urls.local_snippets, source);
        Self::simple(&source, query, SourceKind::Graphgist, url)
    }

    fn simple(source: &str, query: &str, kind: SourceKind, url: String) -> Self {
        Self {
            source: source.to_string(),
            query: query.to_string(),
            kind,
            url,
            api_url: None,
            repository: None,
        }
    }
}
