//! Marker comment rewriting.
//!
//! A marker is a line starting with `//` and a marker name, optionally
//! indented. The `//<name>` prefix becomes a passthrough block the viewer
//! fills in later; the rest of the line follows the block untouched.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// A recognized marker comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Placeholder for the interactive console.
    Console,
    /// Hides the preceding query.
    Hide,
    /// Marks the preceding query as setup.
    Setup,
    /// Graph visualization of the query result.
    GraphResult,
    /// Graph visualization of the whole database.
    Graph,
    /// Raw query output.
    Output,
    /// Result table.
    Table,
}

impl Marker {
    /// Every marker, in the order rewrites are applied.
    pub const ORDER: [Marker; 7] = [
        Marker::Console,
        Marker::Hide,
        Marker::Setup,
        Marker::GraphResult,
        Marker::Graph,
        Marker::Output,
        Marker::Table,
    ];

    /// The name written after `//`.
    pub fn name(self) -> &'static str {
        match self {
            Marker::Console => "console",
            Marker::Hide => "hide",
            Marker::Setup => "setup",
            Marker::GraphResult => "graph_result",
            Marker::Graph => "graph",
            Marker::Output => "output",
            Marker::Table => "table",
        }
    }

    /// The block replacing the `//<name>` prefix.
    pub fn block(self) -> &'static str {
        match self {
            Marker::Console => concat!(
                "++++\n",
                r#"<p class="console"><span class="loading"><i class="icon-cogs"></i> Running queries, preparing the console!</span></p>"#,
                "\n++++\n"
            ),
            Marker::Hide => "++++\n<span class=\"hide-query\"></span>\n++++\n",
            Marker::Setup => "++++\n<span class=\"setup\"></span>\n++++\n",
            Marker::GraphResult => concat!(
                "++++\n",
                r#"<h5 class="graph-visualization" graph-mode="result"><img alt="loading" class="loading" src="http://gist.neo4j.org/images/loading.gif"></h5>"#,
                "\n++++\n"
            ),
            Marker::Graph => concat!(
                "++++\n",
                r#"<h5 class="graph-visualization"><img alt="loading" src="http://gist.neo4j.org/images/loading.gif" class="loading"></h5>"#,
                "\n++++\n"
            ),
            Marker::Output => "++++\n<span class=\"query-output\"></span>\n++++\n",
            Marker::Table => "++++\n<h5 class=\"result-table\"></h5>\n++++\n",
        }
    }

    /// Whether every occurrence is rewritten, or only the first.
    pub fn rewrites_all(self) -> bool {
        !matches!(self, Marker::Console)
    }
}

struct Rule {
    marker: Marker,
    pattern: Regex,
}

impl Rule {
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let limit = if self.marker.rewrites_all() { 0 } else { 1 };
        self.pattern
            .replacen(text, limit, NoExpand(self.marker.block()))
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    Marker::ORDER
        .iter()
        .map(|&marker| Rule {
            marker,
            pattern: Regex::new(&format!(
                r"(?m)^[ \t]*//[ \t]*{}",
                regex::escape(marker.name())
            ))
            .unwrap(),
        })
        .collect()
});

/// Rewrite marker comments into their blocks.
///
/// Text without markers comes back borrowed and unchanged.
pub fn post_process(text: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(text);

    for rule in RULES.iter() {
        let replaced = match rule.apply(&out) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            tracing::trace!("Rewrote '{}' markers", rule.marker.name());
            out = Cow::Owned(s);
        }
    }

    out
}
