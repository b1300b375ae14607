//! Content post-processing applied to resolved documents.

pub mod markers;

pub use markers::{post_process, Marker};
