//! One mounted feed: a loader plus the trigger that drives it.

use tracing::{debug, info};

use super::{FeedLoader, LoadOutcome, VisibilityTrigger};
use crate::domain::{FeedState, FeedStatus};
use crate::ports::{IntersectionEntry, PhotoApi, ViewportObserver};

/// Lifetime of a feed component, from mount to unmount.
///
/// After every load that grows the feed the trigger is moved to the new
/// last photo, so the next visibility event asks for the following page.
/// While no photo has been shown there is nothing to watch, so pages are
/// requested back to back until one yields a photo or the feed stops.
pub struct FeedSession<A, O> {
    loader: FeedLoader<A>,
    trigger: VisibilityTrigger<O>,
}

impl<A: PhotoApi, O: ViewportObserver> FeedSession<A, O> {
    /// Mounts a feed: loads the first page and arms the trigger on the
    /// last photo.
    pub fn mount(loader: FeedLoader<A>, trigger: VisibilityTrigger<O>) -> (Self, LoadOutcome) {
        let mut session = Self { loader, trigger };
        info!("Mounting feed");
        let outcome = session.loader.load_next_page();
        let outcome = session.settle(outcome);
        (session, outcome)
    }

    /// Routes a viewport event to the trigger.
    pub fn handle_intersection(&mut self, entry: &IntersectionEntry) -> Option<LoadOutcome> {
        let outcome = self.trigger.on_intersection(entry, &mut self.loader)?;
        Some(self.settle(outcome))
    }

    /// Reports the current marker as visible, as if the user scrolled to
    /// the end of the list.
    pub fn scroll_to_end(&mut self) -> Option<LoadOutcome> {
        let marker = self.trigger.marker()?.clone();
        self.handle_intersection(&IntersectionEntry::visible(marker))
    }

    /// Retries a failed page on explicit request.
    pub fn retry(&mut self) -> LoadOutcome {
        let outcome = self.loader.retry();
        self.settle(outcome)
    }

    /// Detaches the trigger and tears the loader down.
    ///
    /// Responses to requests begun before unmounting are discarded.
    pub fn unmount(&mut self) {
        debug!(photos = self.loader.state().len(), "Unmounting feed");
        self.trigger.detach();
        self.loader.teardown();
    }

    /// The accumulated feed.
    #[must_use]
    pub const fn state(&self) -> &FeedState {
        self.loader.state()
    }

    /// The loader.
    #[must_use]
    pub const fn loader(&self) -> &FeedLoader<A> {
        &self.loader
    }

    /// Mutable access to the loader, for driving requests by hand.
    pub fn loader_mut(&mut self) -> &mut FeedLoader<A> {
        &mut self.loader
    }

    /// The trigger.
    #[must_use]
    pub const fn trigger(&self) -> &VisibilityTrigger<O> {
        &self.trigger
    }

    /// Re-arms the trigger, then keeps loading while the feed is idle but
    /// has no photo to watch. Returns the last outcome.
    fn settle(&mut self, mut outcome: LoadOutcome) -> LoadOutcome {
        self.rearm();
        while self.trigger.marker().is_none()
            && !self.loader.is_torn_down()
            && self.loader.status() == FeedStatus::Idle
        {
            debug!(page = self.loader.state().page(), "No photo to watch yet, loading on");
            outcome = self.loader.load_next_page();
            self.rearm();
        }
        outcome
    }

    /// Moves the marker to the current last photo.
    pub fn rearm(&mut self) -> bool {
        if self.loader.is_torn_down() {
            return false;
        }
        self.trigger.rearm(self.loader.photos())
    }
}
