//! Configuration schema definitions for graphgist.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format. Every field has a default, so an empty file
//! (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default identifier used when the caller supplies nothing usable.
pub const DEFAULT_SOURCE: &str = "neo4j-contrib/gists//meta/Home.adoc";

/// Root configuration structure for graphgist.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GistConfig {
    /// Repository-file reference resolved for empty identifiers
    #[serde(default = "default_source")]
    pub default_source: String,

    /// Conditional cache settings
    pub cache: CacheSettings,

    /// HTTP client settings
    pub http: HttpSettings,

    /// Provider credentials
    pub auth: AuthSettings,

    /// Provider base URLs
    pub providers: ProviderUrls,
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            default_source: default_source(),
            cache: CacheSettings::default(),
            http: HttpSettings::default(),
            auth: AuthSettings::default(),
            providers: ProviderUrls::default(),
        }
    }
}

/// Conditional cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Seconds during which a cached payload is served without a request
    #[serde(default = "default_freshness_secs")]
    pub freshness_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            freshness_secs: default_freshness_secs(),
        }
    }
}

impl CacheSettings {
    /// Freshness window as a [`Duration`].
    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpSettings {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Provider credential settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Environment variable holding the hosted-gist / repository API token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
        }
    }
}

/// Base URLs for each provider.
///
/// All values are used as plain prefixes, so they should end with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderUrls {
    /// Hosted gist API endpoint
    pub gist_api: String,
    /// Hosted gist web pages
    pub gist_web: String,
    /// Repository contents API
    pub repository_api: String,
    /// Repository web pages
    pub repository_web: String,
    /// Raw repository files (used for asset base paths)
    pub repository_raw: String,
    /// Branch used when an identifier names none
    pub default_branch: String,
    /// Public cloud-share files
    pub share_public: String,
    /// Private cloud-share links
    pub share_private: String,
    /// Locally hosted snippets
    pub local_snippets: String,
    /// Suffix appended to local snippet ids
    pub local_suffix: String,
}

impl Default for ProviderUrls {
    fn default() -> Self {
        Self {
            gist_api: "https://api.github.com/gists/".to_string(),
            gist_web: "https://gist.github.com/".to_string(),
            repository_api: "https://api.github.com/repos/".to_string(),
            repository_web: "https://github.com/".to_string(),
            repository_raw: "https://raw.github.com/".to_string(),
            default_branch: "master".to_string(),
            share_public: "https://dl.dropboxusercontent.com/u/".to_string(),
            share_private: "https://dl.dropboxusercontent.com/s/".to_string(),
            local_snippets: "http://gist.neo4j.org/gists/".to_string(),
            local_suffix: ".adoc".to_string(),
        }
    }
}

impl ProviderUrls {
    /// Point every provider at a single base URL (useful for mirrors and tests).
    pub fn all_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            gist_api: format!("{}/gists/", base),
            gist_web: format!("{}/gist/", base),
            repository_api: format!("{}/repos/", base),
            repository_web: format!("{}/web/", base),
            repository_raw: format!("{}/raw/", base),
            default_branch: "master".to_string(),
            share_public: format!("{}/u/", base),
            share_private: format!("{}/s/", base),
            local_snippets: format!("{}/snippets/", base),
            local_suffix: ".adoc".to_string(),
        }
    }
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_freshness_secs() -> u64 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "neo4j.org".to_string()
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: GistConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config.default_source, DEFAULT_SOURCE);
        assert_eq!(config.cache.freshness_secs, 10);
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.auth.token_env, "GITHUB_TOKEN");
        assert_eq!(config.providers, ProviderUrls::default());
    }

    #[test]
    fn partial_provider_override_keeps_other_defaults() {
        let yaml = r#"
providers:
  gist_api: http://localhost:9000/gists/
cache:
  freshness_secs: 2
"#;
        let config: GistConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.providers.gist_api, "http://localhost:9000/gists/");
        assert_eq!(config.providers.default_branch, "master");
        assert_eq!(config.cache.freshness(), Duration::from_secs(2));
    }

    #[test]
    fn all_at_points_every_provider_at_base() {
        let urls = ProviderUrls::all_at("http://127.0.0.1:4000/");

        assert_eq!(urls.gist_api, "http://127.0.0.1:4000/gists/");
        assert_eq!(urls.share_public, "http://127.0.0.1:4000/u/");
        assert_eq!(urls.local_snippets, "http://127.0.0.1:4000/snippets/");
        assert_eq!(urls.local_suffix, ".adoc");
    }

    #[test]
    fn http_timeout_duration() {
        let http = HttpSettings {
            timeout_secs: 5,
            ..Default::default()
        };
        assert_eq!(http.timeout(), Duration::from_secs(5));
    }
}
