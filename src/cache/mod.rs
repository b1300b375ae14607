//! Payload caching.
//!
//! An in-memory cache keyed by identifier cache key, with a freshness
//! window and ETag-based revalidation against an [`Origin`].

pub mod entry;
pub mod revalidation;
pub mod store;

pub use entry::CacheEntry;
pub use revalidation::{Origin, OriginResponse};
pub use store::ConditionalCache;
