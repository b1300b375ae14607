//! Info command implementation.

use crate::cli::args::InfoArgs;
use crate::error::Result;
use crate::resolver::Resolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::to_json;

/// Describes a viewer URL without fetching anything.
pub struct InfoCommand {
    resolver: Resolver,
    args: InfoArgs,
}

impl InfoCommand {
    /// Create a new info command.
    pub fn new(resolver: Resolver, args: InfoArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let info = self.resolver.info(&self.args.url);

        if self.args.json {
            ui.output(&to_json(&info)?);
            return Ok(CommandResult::success());
        }

        ui.show_field("Source", &info.source);
        ui.show_field("Kind", info.kind.as_str());
        ui.show_field("URL", &info.url);
        if let Some(api_url) = &info.api_url {
            ui.show_field("API URL", api_url);
        }
        if let Some(repo) = &info.repository {
            ui.show_field("Repository", &format!("{}/{}@{}", repo.owner, repo.repo, repo.branch));
            ui.show_field("Path", &repo.path);
        }

        Ok(CommandResult::success())
    }
}
