//! Feed loading: the paginating loader, the visibility trigger that drives
//! it, the session tying both to a component lifetime, and the detail lookup.

mod detail;
mod loader;
mod session;
mod trigger;

pub use detail::{load_photo, DetailError};
pub use loader::{FeedLoader, LoadOutcome, PageRequest, SkipReason};
pub use session::FeedSession;
pub use trigger::VisibilityTrigger;
