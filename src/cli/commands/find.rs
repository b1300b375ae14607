//! Find command implementation.
//!
//! `graphgist find <FRAGMENT> --catalog gists.json` looks a gist up in a
//! JSON catalog by a fragment of its viewer URL, and optionally resolves
//! its content.

use serde::Serialize;

use crate::cli::args::FindArgs;
use crate::error::Result;
use crate::resolver::{find, known_content, load_catalog, GistDescriptor, ResolvedContent, Resolver};
use crate::source::SourceKind;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::to_json;

/// The find command implementation.
pub struct FindCommand {
    resolver: Resolver,
    args: FindArgs,
}

#[derive(Serialize)]
struct Found<'a> {
    #[serde(flatten)]
    descriptor: &'a GistDescriptor,
    original_url: String,
    kind: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<ResolvedContent>,
}

impl FindCommand {
    /// Create a new find command.
    pub fn new(resolver: Resolver, args: FindArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for FindCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = load_catalog(&self.args.catalog)?;
        tracing::debug!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            self.args.catalog.display()
        );

        let Some(descriptor) = find(&catalog, &self.args.fragment) else {
            ui.warning(&format!("No gist matching '{}'", self.args.fragment));
            return Ok(CommandResult::failure(1));
        };

        let resolved = if self.args.resolve {
            Some(
                self.resolver
                    .resolve_descriptor(descriptor, &known_content(&catalog))?,
            )
        } else {
            None
        };

        let found = Found {
            descriptor,
            original_url: descriptor.original_url(),
            kind: self.resolver.info(&descriptor.url).kind,
            resolved,
        };

        if self.args.json {
            ui.output(&to_json(&found)?);
            return Ok(CommandResult::success());
        }

        if !descriptor.title.is_empty() {
            ui.show_header(&descriptor.title);
        }
        ui.show_field("URL", &descriptor.url);
        ui.show_field("Original URL", &found.original_url);
        ui.show_field("Kind", found.kind.as_str());
        if let Some(status) = &descriptor.status {
            ui.show_field("Status", status);
        }
        if let Some(resolved) = &found.resolved {
            ui.output(&resolved.content);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::resolver_at;
    use crate::error::GistError;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        {"id": "1", "title": "Movies", "url": "http://gist.neo4j.org/?8173017", "status": "live"},
        {"id": "2", "title": "Bank Fraud", "url": "http://gist.neo4j.org/?github-neo4j-contrib%2Fgists%2F%2Fother%2FBankFraud.adoc"},
        {"id": "3", "title": "Known", "url": "http://gist.neo4j.org/?known-snippet", "content": "= Known"},
        {"id": "4", "title": "Movies Again", "url": "http://gist.neo4j.org/?movies"}
    ]"#;

    fn catalog(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("gists.json");
        fs::write(&path, CATALOG).unwrap();
        path
    }

    fn args(fragment: &str, catalog: std::path::PathBuf) -> FindArgs {
        FindArgs {
            fragment: fragment.to_string(),
            catalog,
            ..Default::default()
        }
    }

    #[test]
    fn shows_matching_entry() {
        let temp = TempDir::new().unwrap();
        let cmd = FindCommand::new(
            resolver_at("http://mirror.test"),
            args("8173017", catalog(temp.path())),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), &["Movies".to_string()]);
        assert_eq!(ui.field("Original URL"), Some("http://gist.github.com/8173017"));
        assert_eq!(ui.field("Kind"), Some("github-gist"));
        assert_eq!(ui.field("Status"), Some("live"));
        assert!(ui.outputs().is_empty());
    }

    #[test]
    fn last_match_wins() {
        let temp = TempDir::new().unwrap();
        let cmd = FindCommand::new(
            resolver_at("http://mirror.test"),
            args("gist.neo4j.org", catalog(temp.path())),
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.headers(), &["Movies Again".to_string()]);
    }

    #[test]
    fn no_match_fails_with_warning() {
        let temp = TempDir::new().unwrap();
        let cmd = FindCommand::new(
            resolver_at("http://mirror.test"),
            args("nothing-like-this", catalog(temp.path())),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.warnings()[0].contains("nothing-like-this"));
    }

    #[test]
    fn resolve_uses_known_content() {
        let temp = TempDir::new().unwrap();
        let cmd = FindCommand::new(
            resolver_at("http://127.0.0.1:9"),
            FindArgs {
                resolve: true,
                ..args("known-snippet", catalog(temp.path()))
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.outputs(), &["= Known".to_string()]);
    }

    #[test]
    fn resolve_fetches_repository_file() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/neo4j-contrib/gists/contents/other/BankFraud.adoc")
                .query_param("ref", "master");
            then.status(200).body(
                r#"{"path": "other/BankFraud.adoc", "name": "BankFraud.adoc", "content": "PSBCYW5rIEZyYXVk\n"}"#,
            );
        });

        let temp = TempDir::new().unwrap();
        let cmd = FindCommand::new(
            resolver_at(&server.base_url()),
            FindArgs {
                resolve: true,
                json: true,
                ..args("BankFraud", catalog(temp.path()))
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        mock.assert();
        let json: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(json["title"], "Bank Fraud");
        assert_eq!(json["kind"], "github-repo");
        assert_eq!(json["resolved"]["content"], "= Bank Fraud");
    }

    #[test]
    fn missing_catalog_is_io_error() {
        let temp = TempDir::new().unwrap();
        let cmd = FindCommand::new(
            resolver_at("http://mirror.test"),
            args("x", temp.path().join("missing.json")),
        );
        let mut ui = MockUI::new();

        assert!(matches!(cmd.execute(&mut ui).unwrap_err(), GistError::Io(_)));
    }
}
