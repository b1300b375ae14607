//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// graphgist - resolve and render graph-database example gists.
#[derive(Debug, Parser)]
#[command(name = "graphgist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./graphgist.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a gist and print its content
    Resolve(ResolveArgs),

    /// Show how an identifier would be resolved, without fetching
    Inspect(InspectArgs),

    /// Describe a viewer URL
    Info(InfoArgs),

    /// Find a gist in a catalog by URL fragment
    Find(FindArgs),

    /// Rewrite marker comments in a document
    Render(RenderArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Gist identifier (hex id, github-..., dropbox-..., URL or snippet name)
    pub id: Option<String>,

    /// Rewrite marker comments before printing
    #[arg(short, long)]
    pub render: bool,

    /// Print content and metadata as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `inspect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InspectArgs {
    /// Gist identifier
    pub id: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {
    /// Viewer URL, e.g. http://gist.neo4j.org/?8173017
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `find` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FindArgs {
    /// Fragment of the gist's viewer URL
    pub fragment: String,

    /// JSON catalog of known gists
    #[arg(long)]
    pub catalog: PathBuf,

    /// Also resolve and print the gist's content
    #[arg(long)]
    pub resolve: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RenderArgs {
    /// Document to render (stdin when omitted)
    pub file: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
