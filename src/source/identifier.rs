//! Identifier normalization.
//!
//! Callers hand us whatever they have: a short gist hash, a prefixed
//! provider reference, a full URL, a viewer query string, or nothing at all.
//! [`normalize`] classifies it into exactly one [`Provider`] and a normalized
//! id. It never fails; malformed ids surface later as fetch errors.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::config::DEFAULT_SOURCE;

static GIST_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-f]{5,32}/?$").unwrap());

/// Prefix selecting the cloud-share provider.
pub const SHARE_PREFIX: &str = "dropbox-";

/// Prefix selecting the repository-file provider.
pub const REPOSITORY_PREFIX: &str = "github-";

/// The closed set of content providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    /// Hosted gist service, addressed by short hex id.
    HostedGist,
    /// File inside a source repository.
    RepositoryFile,
    /// File on a public cloud share.
    CloudShareFile,
    /// Any URL.
    GenericUrl,
    /// Snippet served from the local content base.
    LocalSnippet,
}

impl Provider {
    /// Every provider, in declaration order.
    pub const ALL: [Provider; 5] = [
        Provider::HostedGist,
        Provider::RepositoryFile,
        Provider::CloudShareFile,
        Provider::GenericUrl,
        Provider::LocalSnippet,
    ];

    /// Stable kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HostedGist => "hosted-gist",
            Self::RepositoryFile => "repository-file",
            Self::CloudShareFile => "cloud-share-file",
            Self::GenericUrl => "generic-url",
            Self::LocalSnippet => "local-snippet",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown provider: {}", s))
    }
}

/// A normalized identifier: one provider, one id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Provider this identifier belongs to.
    pub provider: Provider,
    /// Provider-specific id, with any selection prefix removed.
    pub id: String,
}

impl Identifier {
    /// Create an identifier.
    pub fn new(provider: Provider, id: impl Into<String>) -> Self {
        Self {
            provider,
            id: id.into(),
        }
    }

    /// Key under which fetched content is cached.
    ///
    /// Providers that percent-decode their ids are keyed by the decoded id,
    /// so encoded and plain spellings of one document share an entry.
    pub fn cache_key(&self) -> String {
        match self.provider {
            Provider::RepositoryFile | Provider::CloudShareFile | Provider::GenericUrl => {
                match urlencoding::decode(&self.id) {
                    Ok(decoded) => format!("{}:{}", self.provider, decoded),
                    Err(_) => format!("{}:{}", self.provider, self.id),
                }
            }
            Provider::HostedGist | Provider::LocalSnippet => {
                format!("{}:{}", self.provider, self.id)
            }
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.provider)
    }
}

/// Check whether `id` looks like a hosted gist id (5-32 hex chars, optional trailing slash).
pub fn is_gist_id(id: &str) -> bool {
    GIST_ID.is_match(id)
}

/// Normalize using the built-in default source.
pub fn normalize(raw: &str) -> Identifier {
    normalize_with_default(raw, DEFAULT_SOURCE)
}

/// Normalize a raw identifier, falling back to `default_source` for empty input.
///
/// `default_source` is a repository-file reference without its prefix.
pub fn normalize_with_default(raw: &str, default_source: &str) -> Identifier {
    if raw.chars().count() < 2 {
        return Identifier::new(Provider::RepositoryFile, default_source);
    }

    let stripped = raw.strip_prefix('?').unwrap_or(raw);
    let stripped = match stripped.find('&') {
        Some(cut) => &stripped[..cut],
        None => stripped,
    };

    if stripped.is_empty() {
        return Identifier::new(Provider::RepositoryFile, default_source);
    }

    if is_gist_id(stripped) {
        return Identifier::new(Provider::HostedGist, stripped.trim_end_matches('/'));
    }

    if let Some(rest) = stripped.strip_prefix(SHARE_PREFIX).filter(|r| !r.is_empty()) {
        return Identifier::new(Provider::CloudShareFile, rest);
    }

    if let Some(rest) = stripped
        .strip_prefix(REPOSITORY_PREFIX)
        .filter(|r| !r.is_empty())
    {
        return Identifier::new(Provider::RepositoryFile, rest);
    }

    if stripped.contains("://") {
        Identifier::new(Provider::GenericUrl, stripped)
    } else {
        Identifier::new(Provider::LocalSnippet, stripped)
    }
}
