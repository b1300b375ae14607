//! Provider fetching over HTTP.

pub mod http;

pub use http::{FetchResponse, HttpFetcher, HttpOrigin};
