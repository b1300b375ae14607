//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::ConditionalCache;
use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, resolve_credentials, GistConfig};
use crate::error::Result;
use crate::resolver::Resolver;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given working directory.
    pub fn new(working_dir: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            working_dir,
            config_path,
        }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Load the effective configuration.
    pub fn config(&self) -> Result<GistConfig> {
        load_config(&self.working_dir, self.config_path.as_deref())
    }

    /// Build a resolver with a fresh cache from the effective configuration.
    pub fn resolver(&self) -> Result<Resolver> {
        let config = self.config()?;
        let env: std::collections::HashMap<String, String> = std::env::vars().collect();
        let credentials = resolve_credentials(&config.auth, &env);
        let cache = Arc::new(ConditionalCache::new(config.cache.freshness()));

        tracing::debug!(
            "Resolver ready (freshness {:?}, token: {})",
            config.cache.freshness(),
            credentials.token().is_some()
        );
        Resolver::from_config(&config, &credentials, cache)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Resolve(args) => {
                let cmd = super::resolve::ResolveCommand::new(self.resolver()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Inspect(args) => {
                let cmd = super::inspect::InspectCommand::new(self.resolver()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Info(args) => {
                let cmd = super::info::InfoCommand::new(self.resolver()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Find(args) => {
                let cmd = super::find::FindCommand::new(self.resolver()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Render(args) => {
                let cmd = super::render::RenderCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
