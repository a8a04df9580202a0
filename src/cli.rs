use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use navtree::Format;

/// navtree - load, validate and convert documentation sidebar trees
#[derive(Parser, Debug)]
#[command(name = "navtree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Omit --source to use the built-in docs sidebar.")]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./navtree.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a sidebar document (exits non-zero on errors)
    Check {
        /// Sidebar document (.json, .yaml, .yml or .toml)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Fail on warnings too
        #[arg(long)]
        strict_warnings: bool,

        /// Deepest allowed nesting, at least 1 (overrides config)
        #[arg(long)]
        max_depth: Option<NonZeroUsize>,
    },

    /// Print one sidebar, or one group inside it
    Get {
        /// Sidebar name (e.g. docs)
        name: String,

        /// Sidebar document
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Only print the group with this label
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Print every sidebar as a tree
    Show {
        /// Sidebar document
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// List document ids in display order
    Ids {
        /// Sidebar document
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Only list ids of this sidebar
        #[arg(long)]
        sidebar: Option<String>,
    },

    /// Re-emit a sidebar document in another format
    Convert {
        /// Sidebar document
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output format (defaults to output.format from config)
        #[arg(short, long, value_enum)]
        to: Option<Format>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Check { .. } => "check",
            Commands::Get { .. } => "get",
            Commands::Show { .. } => "show",
            Commands::Ids { .. } => "ids",
            Commands::Convert { .. } => "convert",
        }
    }
}
