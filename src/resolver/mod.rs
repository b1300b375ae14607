//! Gist resolution.
//!
//! [`Resolver`] ties the pieces together: a raw identifier is normalized,
//! routed to its provider's strategy, fetched through the shared
//! [`ConditionalCache`] and finally extracted into [`ResolvedContent`].
//!
//! ```text
//! raw id -> normalize -> registry -> build_request -> cache (HTTP) -> extract
//! ```

pub mod gist;

pub use gist::{known_content, load_catalog, GistDescriptor, GIST_HOME};

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::ConditionalCache;
use crate::config::{Credentials, GistConfig, ProviderUrls};
use crate::error::{GistError, Result};
use crate::registry::{FetchStrategy, HttpFetcher, HttpOrigin, ProviderRegistry};
use crate::source::{
    normalize_with_default, Identifier, Provider, SourceInfo, SourceKind, SHARED_PREFIX,
};

/// Placeholder stored for gists whose content could not be loaded earlier.
pub const CONTENT_NOT_FOUND: &str = "Content not found";

/// A resolved document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedContent {
    /// Raw document text, before post-processing.
    pub content: String,
    /// The URL the content was loaded from.
    pub canonical_url: String,
    /// Base URL for relative assets, when the provider has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_base: Option<String>,
}

/// How an identifier would be resolved, without fetching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// Provider the identifier was routed to.
    pub provider: Provider,
    /// Normalized id.
    pub id: String,
    /// Cache key.
    pub cache_key: String,
    /// URL that would be requested.
    pub request_url: String,
    /// Whether the cache already holds an entry.
    pub cached: bool,
}

/// Resolves identifiers to content.
#[derive(Debug)]
pub struct Resolver {
    registry: ProviderRegistry,
    fetcher: HttpFetcher,
    cache: Arc<ConditionalCache>,
    urls: ProviderUrls,
    default_source: String,
}

impl Resolver {
    /// Assemble a resolver from its parts.
    pub fn new(
        registry: ProviderRegistry,
        fetcher: HttpFetcher,
        cache: Arc<ConditionalCache>,
        urls: ProviderUrls,
        default_source: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            fetcher,
            cache,
            urls,
            default_source: default_source.into(),
        }
    }

    /// Build a resolver from configuration, sharing `cache`.
    pub fn from_config(
        config: &GistConfig,
        credentials: &Credentials,
        cache: Arc<ConditionalCache>,
    ) -> Result<Self> {
        Ok(Self::new(
            ProviderRegistry::from_config(&config.providers, credentials),
            HttpFetcher::new(&config.http)?,
            cache,
            config.providers.clone(),
            config.default_source.clone(),
        ))
    }

    /// The shared cache.
    pub fn cache(&self) -> &Arc<ConditionalCache> {
        &self.cache
    }

    /// Normalize a raw identifier with this resolver's default source.
    pub fn normalize(&self, raw: &str) -> Identifier {
        normalize_with_default(raw, &self.default_source)
    }

    /// Resolve a raw identifier.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedContent> {
        let identifier = self.normalize(raw);
        self.resolve_identifier(&identifier)
    }

    /// Resolve an already normalized identifier.
    pub fn resolve_identifier(&self, identifier: &Identifier) -> Result<ResolvedContent> {
        tracing::debug!("Resolving {}", identifier);

        let strategy = self.strategy(identifier)?;
        let request = strategy.build_request(&identifier.id)?;
        let origin = HttpOrigin::new(&self.fetcher, &request);
        let body = self.cache.get_or_fetch(&identifier.cache_key(), &origin)?;
        let extracted = strategy.extract(&identifier.id, &request, &body)?;

        Ok(ResolvedContent {
            content: extracted.content,
            canonical_url: request.url,
            asset_base: extracted.asset_base,
        })
    }

    /// Describe how `raw` would be resolved. No network I/O.
    pub fn inspect(&self, raw: &str) -> Result<Inspection> {
        let identifier = self.normalize(raw);
        let request = self.strategy(&identifier)?.build_request(&identifier.id)?;
        let cache_key = identifier.cache_key();

        Ok(Inspection {
            cached: self.cache.peek(&cache_key).is_some(),
            provider: identifier.provider,
            id: identifier.id,
            cache_key,
            request_url: request.url,
        })
    }

    /// Describe a viewer URL.
    pub fn info(&self, viewer_url: &str) -> SourceInfo {
        SourceInfo::parse(viewer_url, &self.urls)
    }

    /// Content for a catalog entry.
    ///
    /// `known` maps viewer URLs to content loaded earlier. Known content wins
    /// unless it is the [`CONTENT_NOT_FOUND`] placeholder; otherwise the
    /// viewer URL's source is resolved.
    pub fn resolve_descriptor(
        &self,
        descriptor: &GistDescriptor,
        known: &HashMap<String, String>,
    ) -> Result<ResolvedContent> {
        let info = self.info(&descriptor.url);

        if let Some(content) = known
            .get(&descriptor.url)
            .filter(|c| !c.is_empty() && c.as_str() != CONTENT_NOT_FOUND)
        {
            tracing::debug!("Using known content for {}", descriptor.url);
            return Ok(ResolvedContent {
                content: content.clone(),
                canonical_url: info.url,
                asset_base: None,
            });
        }

        // Strategies decode ids themselves, so hand them the query as written.
        let identifier = match info.kind {
            SourceKind::Any => self.normalize(&descriptor.url),
            SourceKind::Url => Identifier::new(Provider::GenericUrl, info.query),
            // Private share links have no provider of their own.
            SourceKind::DropboxShared => Identifier::new(
                Provider::GenericUrl,
                format!(
                    "{}{}",
                    self.urls.share_private,
                    info.query.get(SHARED_PREFIX.len()..).unwrap_or_default()
                ),
            ),
            _ => self.normalize(&info.query),
        };
        self.resolve_identifier(&identifier)
    }

    fn strategy(&self, identifier: &Identifier) -> Result<&dyn FetchStrategy> {
        self.registry
            .get(identifier.provider)
            .ok_or_else(|| GistError::InvalidIdentifier {
                id: identifier.id.clone(),
                reason: format!("no strategy registered for {}", identifier.provider),
            })
    }
}

/// Find a catalog entry whose URL contains `fragment`.
///
/// When several entries match, the last one wins.
pub fn find<'a>(collection: &'a [GistDescriptor], fragment: &str) -> Option<&'a GistDescriptor> {
    collection
        .iter()
        .rev()
        .find(|gist| gist.url.contains(fragment))
}
