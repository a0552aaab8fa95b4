//! Progress bar adapter using indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use photo_feed_core::{FeedEvent, FeedEventSink};

/// Progress bar adapter for CLI output.
pub struct ProgressBar {
    bar: Option<IndicatifBar>,
    quiet: bool,
}

impl ProgressBar {
    /// Creates a new progress bar.
    ///
    /// # Arguments
    ///
    /// * `quiet` - If true, suppress all output
    /// * `show_bar` - If true, show a spinner; otherwise print only warnings
    #[must_use]
    pub fn new(quiet: bool, show_bar: bool) -> Self {
        if quiet {
            return Self {
                bar: None,
                quiet: true,
            };
        }

        let bar = if show_bar {
            let bar = IndicatifBar::new_spinner();
            if let Ok(style) =
                ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {pos} photos {msg}")
            {
                bar.set_style(style);
            }
            Some(bar)
        } else {
            None
        };

        Self { bar, quiet }
    }
}

impl FeedEventSink for ProgressBar {
    fn on_event(&self, event: FeedEvent) {
        if self.quiet {
            return;
        }

        match event {
            FeedEvent::PageRequested { page } => {
                if let Some(bar) = &self.bar {
                    bar.set_message(format!("(loading page {page})"));
                }
            }
            FeedEvent::PageLoaded {
                page,
                appended,
                malformed,
                ..
            } => {
                if let Some(bar) = &self.bar {
                    bar.inc(appended as u64);
                    bar.set_message(format!("(page {page})"));
                }
                if malformed > 0 {
                    eprintln!("WARN: Page {page}: skipped {malformed} malformed photo(s)");
                }
            }
            FeedEvent::Exhausted { .. } => {
                if let Some(bar) = &self.bar {
                    bar.finish_with_message("Done: end of feed");
                }
            }
            FeedEvent::Failed { page, .. } => {
                if let Some(bar) = &self.bar {
                    bar.abandon_with_message(format!("(page {page} failed)"));
                }
            }
        }
    }
}
