//! Scroll-linked parallax: fade out and drift down as the page scrolls.
//!
//! Every scroll notification recomputes a [`ParallaxFrame`] and writes it
//! straight onto the target node's inline style. Nothing goes through
//! reactive state, so scrolling never re-renders the view.

use crate::config::{PARALLAX_FACTOR, PARALLAX_FADE_DISTANCE, PARALLAX_MIN_OPACITY};
use crate::motion::css_number;
use crate::scroll::{ScrollSource, Subscription};
use crate::AppResult;

/// Something inline styles can be written to.
pub trait StyleSink {
    fn set_style(&self, property: &str, value: &str) -> AppResult<()>;
}

impl StyleSink for web_sys::HtmlElement {
    fn set_style(&self, property: &str, value: &str) -> AppResult<()> {
        self.style().set_property(property, value)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Scroll distance over which opacity falls from 1 by one unit.
    pub fade_distance: f64,
    /// Opacity never drops below this.
    pub min_opacity: f64,
    /// Vertical translation per scrolled pixel.
    pub factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            fade_distance: PARALLAX_FADE_DISTANCE,
            min_opacity: PARALLAX_MIN_OPACITY,
            factor: PARALLAX_FACTOR,
        }
    }
}

impl ParallaxConfig {
    /// Style values for a vertical scroll `offset`. Negative offsets
    /// (overscroll bounce) count as zero.
    pub fn frame(&self, offset: f64) -> ParallaxFrame {
        let offset = offset.max(0.0);
        ParallaxFrame {
            opacity: (1.0 - offset / self.fade_distance).clamp(self.min_opacity, 1.0),
            translate_y: offset * self.factor,
        }
    }
}

/// Derived style for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub opacity: f64,
    /// Downward translation in pixels.
    pub translate_y: f64,
}

impl ParallaxFrame {
    pub fn opacity_css(&self) -> String {
        css_number(self.opacity)
    }

    pub fn transform_css(&self) -> String {
        format!("translateY({}px)", css_number(self.translate_y))
    }

    pub fn apply(&self, sink: &impl StyleSink) -> AppResult<()> {
        sink.set_style("opacity", &self.opacity_css())?;
        sink.set_style("transform", &self.transform_css())
    }
}

/// Drive `sink` from `source` until the returned subscription is dropped.
pub fn bind_parallax<S>(
    source: &dyn ScrollSource,
    sink: S,
    config: ParallaxConfig,
) -> AppResult<Subscription>
where
    S: StyleSink + 'static,
{
    source.subscribe(Box::new(move |offset| {
        if let Err(e) = config.frame(offset).apply(&sink) {
            log::warn!("Parallax write failed at offset {}: {}", offset, e);
        }
    }))
}
