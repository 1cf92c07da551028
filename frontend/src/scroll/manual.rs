//! In-memory scroll source.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use super::{ScrollListener, ScrollSource, Subscription};
use crate::AppResult;

#[derive(Default)]
struct Inner {
    offset: f64,
    next_id: u64,
    listeners: Vec<(u64, ScrollListener)>,
    /// Ids cancelled while their listener was detached for notification.
    removed: HashSet<u64>,
}

/// Scroll source moved by calling [`ManualScroll::scroll_to`].
///
/// Used to run scroll-driven code outside a browser. Clones share state.
#[derive(Clone, Default)]
pub struct ManualScroll {
    inner: Rc<RefCell<Inner>>,
}

impl ManualScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `offset` and notify every listener in registration order.
    ///
    /// A listener cancelled during the pass, including by itself, is not
    /// called again.
    pub fn scroll_to(&self, offset: f64) {
        // Listeners run without the borrow held so they may read `offset()`
        // or drop subscriptions.
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            std::mem::take(&mut inner.listeners)
        };
        for (id, listener) in listeners.iter_mut() {
            if self.inner.borrow().removed.contains(id) {
                continue;
            }
            listener(offset);
        }

        let mut inner = self.inner.borrow_mut();
        let removed = std::mem::take(&mut inner.removed);
        listeners.retain(|(id, _)| !removed.contains(id));
        listeners.append(&mut inner.listeners);
        inner.listeners = listeners;
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ScrollSource for ManualScroll {
    fn offset(&self) -> f64 {
        self.inner.borrow().offset
    }

    fn subscribe(&self, listener: ScrollListener) -> AppResult<Subscription> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener));
            id
        };

        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                let before = inner.listeners.len();
                inner.listeners.retain(|(other, _)| *other != id);
                if inner.listeners.len() == before {
                    // Detached by a notification in progress.
                    inner.removed.insert(id);
                }
            }
        }))
    }
}
