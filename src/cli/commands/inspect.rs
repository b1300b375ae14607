//! Inspect command implementation.
//!
//! `graphgist inspect <ID>` shows the provider, cache key and request URL
//! an identifier maps to, without any network traffic.

use crate::cli::args::InspectArgs;
use crate::error::Result;
use crate::resolver::Resolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::to_json;

/// The inspect command implementation.
pub struct InspectCommand {
    resolver: Resolver,
    args: InspectArgs,
}

impl InspectCommand {
    /// Create a new inspect command.
    pub fn new(resolver: Resolver, args: InspectArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for InspectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let inspection = self
            .resolver
            .inspect(self.args.id.as_deref().unwrap_or(""))?;

        if self.args.json {
            ui.output(&to_json(&inspection)?);
            return Ok(CommandResult::success());
        }

        ui.show_field("Provider", inspection.provider.as_str());
        ui.show_field("Id", &inspection.id);
        ui.show_field("Cache key", &inspection.cache_key);
        ui.show_field("Request URL", &inspection.request_url);
        ui.show_field("Cached", if inspection.cached { "yes" } else { "no" });

        Ok(CommandResult::success())
    }
}
