//! Resolve command implementation.
//!
//! `graphgist resolve <ID>` fetches a gist and prints its content.

use crate::cli::args::ResolveArgs;
use crate::error::Result;
use crate::render::post_process;
use crate::resolver::Resolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::to_json;

/// The resolve command implementation.
pub struct ResolveCommand {
    resolver: Resolver,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(resolver: Resolver, args: ResolveArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut resolved = self.resolver.resolve(self.args.id.as_deref().unwrap_or(""))?;

        if self.args.render {
            resolved.content = post_process(&resolved.content).into_owned();
        }

        if self.args.json {
            ui.output(&to_json(&resolved)?);
        } else {
            ui.output(&resolved.content);
            ui.success(&format!("Resolved from {}", resolved.canonical_url));
        }

        Ok(CommandResult::success())
    }
}
