//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and builds the shared
//! [`Resolver`](crate::resolver::Resolver) for the commands that need one.

pub mod completions;
pub mod dispatcher;
pub mod find;
pub mod info;
pub mod inspect;
pub mod render;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::error::{GistError, Result};

/// Pretty-print a value as JSON.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| GistError::Other(e.into()))
}

/// A resolver whose providers all live under `base_url`.
#[cfg(test)]
pub(crate) fn resolver_at(base_url: &str) -> crate::resolver::Resolver {
    use crate::cache::ConditionalCache;
    use crate::config::{Credentials, GistConfig, ProviderUrls};
    use std::sync::Arc;

    let config = GistConfig {
        providers: ProviderUrls::all_at(base_url),
        ..Default::default()
    };
    let cache = Arc::new(ConditionalCache::new(config.cache.freshness()));
    crate::resolver::Resolver::from_config(&config, &Credentials::anonymous(), cache).unwrap()
}
