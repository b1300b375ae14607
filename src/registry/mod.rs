//! Provider registry.
//!
//! Every [`Provider`] maps to one [`FetchStrategy`]:
//! - [`HostedGistStrategy`] - hosted gists by hex id
//! - [`RepositoryFileStrategy`] - repository files through the contents API
//! - [`CloudShareStrategy`] - public cloud-share files
//! - [`GenericUrlStrategy`] - any URL
//! - [`LocalSnippetStrategy`] - snippets on the local content base
//!
//! The HTTP side lives in [`fetch`].
//!
//! # Example
//!
//! ```
//! use graphgist::config::{Credentials, ProviderUrls};
//! use graphgist::registry::ProviderRegistry;
//! use graphgist::source::{normalize, Provider};
//!
//! let registry = ProviderRegistry::from_config(&ProviderUrls::default(), &Credentials::anonymous());
//! let id = normalize("8173017");
//! let request = registry.get(id.provider).unwrap().build_request(&id.id).unwrap();
//! assert_eq!(request.url, "https://api.github.com/gists/8173017");
//! ```

pub mod fetch;
pub mod gist;
pub mod local;
pub mod repository;
pub mod share;
pub mod strategy;
pub mod url;

pub use fetch::{FetchResponse, HttpFetcher, HttpOrigin};
pub use gist::HostedGistStrategy;
pub use local::LocalSnippetStrategy;
pub use repository::RepositoryFileStrategy;
pub use share::CloudShareStrategy;
pub use strategy::{Extracted, FetchRequest, FetchStrategy};
pub use url::GenericUrlStrategy;

use std::collections::HashMap;
use std::fmt;

use crate::config::{Credentials, ProviderUrls};
use crate::source::Provider;

/// Maps each provider to its fetch strategy.
#[derive(Default)]
pub struct ProviderRegistry {
    strategies: HashMap<Provider, Box<dyn FetchStrategy>>,
}

impl ProviderRegistry {
    /// A registry with no strategies.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry with every built-in strategy, configured from provider URLs.
    pub fn from_config(urls: &ProviderUrls, credentials: &Credentials) -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(HostedGistStrategy::new(
            &urls.gist_api,
            credentials.clone(),
        )));
        registry.register(Box::new(RepositoryFileStrategy::new(
            &urls.repository_api,
            &urls.repository_raw,
            &urls.default_branch,
            credentials.clone(),
        )));
        registry.register(Box::new(CloudShareStrategy::new(&urls.share_public)));
        registry.register(Box::new(GenericUrlStrategy::new()));
        registry.register(Box::new(LocalSnippetStrategy::new(
            &urls.local_snippets,
            &urls.local_suffix,
        )));
        registry
    }

    /// Register a strategy under its provider, returning any it replaced.
    pub fn register(&mut self, strategy: Box<dyn FetchStrategy>) -> Option<Box<dyn FetchStrategy>> {
        self.strategies.insert(strategy.provider(), strategy)
    }

    /// The strategy for a provider.
    pub fn get(&self, provider: Provider) -> Option<&dyn FetchStrategy> {
        self.strategies.get(&provider).map(|s| s.as_ref())
    }

    /// Registered providers, in declaration order.
    pub fn providers(&self) -> Vec<Provider> {
        let mut providers: Vec<Provider> = self.strategies.keys().copied().collect();
        providers.sort();
        providers
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers())
            .finish()
    }
}
