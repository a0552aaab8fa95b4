//! Output formatting for CLI.

mod card;
mod json;
mod progress;

pub use card::PhotoCard;
pub use json::JsonOutput;
pub use progress::ProgressBar;
