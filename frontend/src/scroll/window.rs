//! Browser window scroll source.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};

use super::{ScrollListener, ScrollSource, Subscription};
use crate::{AppError, AppResult};

/// Scroll notifications from `window`, via a passive `scroll` listener.
#[derive(Clone)]
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Source for the current global window.
    pub fn current() -> AppResult<Self> {
        web_sys::window()
            .map(Self::new)
            .ok_or_else(|| AppError::Environment("window is not available".into()))
    }
}

impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn subscribe(&self, mut listener: ScrollListener) -> AppResult<Subscription> {
        let reader = self.window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            listener(reader.scroll_y().unwrap_or(0.0));
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )?;

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            if let Err(e) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove scroll listener: {:?}", e);
            }
            // `callback` is dropped here, after it has been detached.
        }))
    }
}
