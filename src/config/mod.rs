//! Configuration loading for graphgist.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and environment overrides in [`loader`]
//! - Provider credentials in [`auth`]
//!
//! # Example
//!
//! ```
//! use graphgist::config::{parse_config, GistConfig};
//! use std::path::Path;
//!
//! let config: GistConfig = parse_config("cache:\n  freshness_secs: 5\n", Path::new("x.yml")).unwrap();
//! assert_eq!(config.cache.freshness_secs, 5);
//! assert_eq!(config.providers.default_branch, "master");
//! ```

pub mod auth;
pub mod loader;
pub mod schema;

pub use auth::{resolve_credentials, Credentials, TOKEN_PASSWORD};
pub use loader::{
    apply_env_overrides, find_config_file, load_config, load_config_file, parse_config,
    CONFIG_FILE_NAME, FRESHNESS_ENV,
};
pub use schema::{
    AuthSettings, CacheSettings, GistConfig, HttpSettings, ProviderUrls, DEFAULT_SOURCE,
};
