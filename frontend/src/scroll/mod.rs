//! Scroll position as an injected capability.
//!
//! Components never reach for `window` directly; they receive a
//! [`ScrollSource`] and get a [`Subscription`] back. Dropping the
//! subscription detaches the listener, so a handler can never outlive the
//! component that registered it.
//!
//! - [`WindowScroll`] - the browser window
//! - [`ManualScroll`] - an in-memory source driven by hand
//! - [`SubscriptionSlot`] - ties a subscription to a component's lifetime

mod manual;
mod window;

pub use manual::ManualScroll;
pub use window::WindowScroll;

use std::cell::{Cell, RefCell};

use crate::AppResult;

/// Callback receiving the current vertical scroll offset in pixels.
pub type ScrollListener = Box<dyn FnMut(f64)>;

/// A source of vertical scroll offset notifications.
pub trait ScrollSource {
    /// Current vertical offset in pixels.
    fn offset(&self) -> f64;

    /// Register `listener` for every scroll notification until the returned
    /// subscription is dropped.
    fn subscribe(&self, listener: ScrollListener) -> AppResult<Subscription>;
}

/// Guard for a registered listener. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unsubscribe now. Same as dropping.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Holds a subscription for a component that may be torn down before the
/// subscription arrives.
///
/// Once [`release`](SubscriptionSlot::release) has run, anything installed
/// is dropped on the spot instead of being kept alive past its owner.
#[derive(Default)]
pub struct SubscriptionSlot {
    current: RefCell<Option<Subscription>>,
    released: Cell<bool>,
}

impl SubscriptionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, subscription: Subscription) {
        if self.released.get() {
            drop(subscription);
            return;
        }
        // Replacing an earlier subscription cancels it.
        self.current.borrow_mut().replace(subscription);
    }

    /// Cancel the held subscription and refuse later ones.
    pub fn release(&self) {
        self.released.set(true);
        let subscription = self.current.borrow_mut().take();
        drop(subscription);
    }

    pub fn is_active(&self) -> bool {
        self.current.borrow().is_some()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_subscription_cancels_once_on_drop() {
        let cancelled = Rc::new(Cell::new(0));
        let counter = cancelled.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        assert_eq!(cancelled.get(), 0);

        subscription.cancel();
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn test_slot_release_cancels_held_subscription() {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        let slot = SubscriptionSlot::new();

        slot.install(Subscription::new(move || flag.set(true)));
        assert!(slot.is_active());
        assert!(!cancelled.get());

        slot.release();
        assert!(!slot.is_active());
        assert!(cancelled.get());
    }

    #[test]
    fn test_slot_drops_late_subscription_after_release() {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        let slot = SubscriptionSlot::new();

        slot.release();
        slot.install(Subscription::new(move || flag.set(true)));
        assert!(!slot.is_active());
        assert!(cancelled.get());
    }
}
