//! Catalog entries describing known gists.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{GistError, Result};

static VIEWER_GIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*gist\.neo4j\.org/\?([^\-#]+)$").unwrap());

/// Where plain viewer links to hosted gists point back to.
pub const GIST_HOME: &str = "http://gist.github.com/";

/// A gist known to the caller, typically loaded from a JSON catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistDescriptor {
    /// Catalog id.
    #[serde(default)]
    pub id: Option<String>,

    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Viewer URL of the gist.
    pub url: String,

    /// Publication status (e.g. "live", "candidate").
    #[serde(default)]
    pub status: Option<String>,

    /// Whether the gist is featured.
    #[serde(default)]
    pub featured: bool,

    /// Content loaded earlier, if the catalog carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl GistDescriptor {
    /// A descriptor with only a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: None,
            title: String::new(),
            url: url.into(),
            status: None,
            featured: false,
            content: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The link to the gist's own page.
    ///
    /// Viewer links carrying a bare gist reference point back at the hosted
    /// gist; everything else is returned as is.
    pub fn original_url(&self) -> String {
        match VIEWER_GIST.captures(&self.url) {
            Some(caps) => format!("{}{}", GIST_HOME, &caps[1]),
            None => self.url.clone(),
        }
    }
}

/// Content already known for catalog entries, keyed by viewer URL.
pub fn known_content(catalog: &[GistDescriptor]) -> HashMap<String, String> {
    catalog
        .iter()
        .filter_map(|gist| Some((gist.url.clone(), gist.content.clone()?)))
        .collect()
}

/// Load a JSON array of descriptors.
pub fn load_catalog(path: &Path) -> Result<Vec<GistDescriptor>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| GistError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
