//! Show command - look up a single photo.

use anyhow::{Context, Result};
use clap::Args;
use photo_feed_core::{load_photo, PhotoId};
use tracing::info;

use super::SourceArgs;
use crate::config::AppConfig;
use crate::output::{JsonOutput, PhotoCard};

/// Arguments for a photo lookup.
#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Photo id
    pub id: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ShowArgs {
    /// Apply configuration file values, respecting CLI precedence.
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        args.source = args.source.with_config(config);
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        args
    }
}

/// Run the show command.
pub fn run(args: &ShowArgs) -> Result<()> {
    let api = args.source.open()?;
    let id = PhotoId::new(args.id.trim());
    info!("Looking up photo {id}");

    let photo = load_photo(&api, &id).with_context(|| format!("Cannot show photo {id}"))?;

    let output = JsonOutput::stdout();
    output.write_value(&PhotoCard::from(&photo), args.pretty)?;
    output.flush()
}
