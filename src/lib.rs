//! graphgist - resolve and render graph-database example gists.
//!
//! A gist is an AsciiDoc document hosted somewhere on the web: a hosted gist,
//! a file in a source repository, a cloud-share link, a plain URL or a
//! locally hosted snippet. graphgist turns a loose identifier into the
//! document's text, caching responses and revalidating them with ETags.
//!
//! # Modules
//!
//! - [`cache`] - Conditional (ETag) response cache
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and credentials
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Per-provider fetch strategies and the HTTP fetcher
//! - [`render`] - Marker comment rewriting
//! - [`resolver`] - Identifier to content resolution and catalog lookup
//! - [`source`] - Identifier classification and viewer URL inspection
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use graphgist::render::post_process;
//! use graphgist::source::{normalize, Provider};
//!
//! let id = normalize("github-neo4j-contrib/gists//meta/Home.adoc");
//! assert_eq!(id.provider, Provider::RepositoryFile);
//!
//! let html = post_process("MATCH (n) RETURN n\n//table\n");
//! assert!(html.contains("result-table"));
//! ```
//!
//! For network resolution, see the integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod source;
pub mod ui;

pub use error::{GistError, Result};
