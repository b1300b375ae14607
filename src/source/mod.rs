//! Identifier classification.
//!
//! - [`identifier`] - raw identifier → [`Provider`] + normalized id
//! - [`repo_path`] - repository file references
//! - [`info`] - viewer URL inspection
//!
//! # Example
//!
//! ```
//! use graphgist::source::{normalize, Provider};
//!
//! let id = normalize("dropbox-14493611/movie.adoc");
//! assert_eq!(id.provider, Provider::CloudShareFile);
//! assert_eq!(id.id, "14493611/movie.adoc");
//! ```

pub mod identifier;
pub mod info;
pub mod repo_path;

pub use identifier::{
    is_gist_id, normalize, normalize_with_default, Identifier, Provider, REPOSITORY_PREFIX,
    SHARE_PREFIX,
};
pub use info::{SourceInfo, SourceKind, SHARED_PREFIX};
pub use repo_path::RepositoryPath;
