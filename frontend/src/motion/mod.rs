//! Motion primitives for the hero section.
//!
//! - [`easing`] - CSS timing functions
//! - [`spring`] - Damped spring model baked into `linear()` easings
//! - [`pose`] - Animatable style values
//! - [`transition`] - The closed set of transition presets
//! - [`presets`] - The concrete poses and transitions used by the hero

pub mod easing;
pub mod pose;
pub mod presets;
pub mod spring;
pub mod transition;

pub use easing::Easing;
pub use pose::Pose;
pub use spring::Spring;
pub use transition::Transition;

/// Format a number for CSS: at most four decimals, no trailing zeros.
pub fn css_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}
