//! CLI command definitions and handlers.

pub mod feed;
pub mod show;
mod source;

use clap::{Parser, Subcommand};

pub use source::SourceArgs;

/// Photo Feed - Infinite-scroll photo feed
#[derive(Parser)]
#[command(name = "photo-feed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared feed arguments (source, paging, output).
    #[command(flatten)]
    pub feed: feed::FeedArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Scroll through the feed and print every photo
    Feed(feed::FeedArgs),
    /// Look up a single photo
    Show(show::ShowArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The feed loaded without errors, possibly to exhaustion.
    Success = 0,
    /// A page or lookup failed, or the command could not run.
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
