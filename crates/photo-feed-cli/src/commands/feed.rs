//! Feed command - scroll through the photo feed.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, ValueEnum};
use photo_feed_core::{
    FeedError, FeedLoader, FeedSession, FeedState, FeedStatus, LoadOutcome, Photo,
    VisibilityTrigger,
};
use tracing::{debug, info};

use super::{ExitCode, SourceArgs};
use crate::config::AppConfig;
use crate::output::{JsonOutput, PhotoCard, ProgressBar};
use crate::viewport::ScrollViewport;

/// Output format for photos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

impl OutputFormat {
    /// Parses a config file value.
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "json" => Some(Self::Json),
            "jsonl" => Some(Self::Jsonl),
            _ => None,
        }
    }
}

/// Arguments for scrolling the feed.
#[derive(Args, Clone)]
pub struct FeedArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Stop after this many page requests
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl FeedArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. `PHOTO_FEED_ACCESS_KEY` and CLI arguments (already set on self)
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        args.source = args.source.with_config(config);

        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_deref()
                .and_then(OutputFormat::from_config);
        }

        // Boolean output options: CLI flag wins, then config
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Result of running the feed command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct FeedResult {
    /// Number of pages requested.
    pub pages: u32,
    /// Number of photos printed.
    pub photos: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the feed command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &FeedArgs) -> Result<FeedResult> {
    let api = args.source.open()?;

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress = Arc::new(ProgressBar::new(args.quiet, show_progress));
    let output = JsonOutput::stdout();

    let loader = FeedLoader::new(api).with_events(progress);
    let trigger = VisibilityTrigger::new(ScrollViewport::default());
    let (mut session, first) = FeedSession::mount(loader, trigger);
    debug!(?first, "Mounted feed");

    let mut written = 0;
    written += emit_new(&output, args, session.state().photos(), written)?;

    while below_limit(args, session.state()) {
        let Some(outcome) = session.scroll_to_end() else {
            break;
        };
        if let LoadOutcome::Loaded { page, appended, .. } = outcome {
            debug!(page, appended, "Scrolled");
        }
        written += emit_new(&output, args, session.state().photos(), written)?;
    }

    if args.format() == OutputFormat::Json {
        let cards: Vec<_> = session.state().photos().iter().map(PhotoCard::from).collect();
        output.write_array(&cards, args.pretty)?;
    }
    output.flush()?;

    let pages = pages_requested(session.state());
    let exit_code = match session.state().status() {
        FeedStatus::Failed => {
            if let Some(error) = session.state().error() {
                let FeedError::FetchFailed { page, reason } = error;
                eprintln!("error: {error} (page {page}): {reason}");
            }
            ExitCode::Error
        }
        FeedStatus::Idle | FeedStatus::Loading if below_limit(args, session.state()) => {
            eprintln!(
                "error: feed stopped before its end (next page {})",
                session.state().page()
            );
            ExitCode::Error
        }
        status => {
            info!(?status, pages, photos = written, "Feed finished");
            ExitCode::Success
        }
    };
    session.unmount();

    Ok(FeedResult {
        pages,
        photos: session.state().len(),
        exit_code,
    })
}

/// Pages asked of the API so far. A failed or empty page was requested but
/// did not advance the page counter.
fn pages_requested(state: &FeedState) -> u32 {
    let settled = state.page().saturating_sub(1);
    match state.status() {
        FeedStatus::Exhausted | FeedStatus::Failed => settled.saturating_add(1),
        FeedStatus::Idle | FeedStatus::Loading => settled,
    }
}

/// Returns true while `--pages` still allows another request.
fn below_limit(args: &FeedArgs, state: &FeedState) -> bool {
    args.pages.map_or(true, |limit| pages_requested(state) < limit)
}

/// Writes photos appended since the last call. JSON arrays are written once
/// at the end instead.
fn emit_new(
    output: &JsonOutput,
    args: &FeedArgs,
    photos: &[Photo],
    written: usize,
) -> Result<usize> {
    let fresh = photos.get(written..).unwrap_or_default();
    if args.format() == OutputFormat::Jsonl {
        for photo in fresh {
            output.write(&PhotoCard::from(photo))?;
        }
    }
    Ok(fresh.len())
}
