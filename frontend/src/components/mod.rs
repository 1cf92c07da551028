//! UI Components for the salon landing page.
//!
//! # Section
//! - [`Hero`] - Headline, call-to-action, image, parallax and entrance sequence
//!
//! # Parts
//! - [`CtaButton`] - Call-to-action with spring hover/tap feedback
//! - [`BlurBackdrop`] - Blurred background circles
//! - [`HeroImage`] - Circular framed image
//! - [`FloatingShape`] - Endlessly bobbing decorative dot

mod cta;
mod decor;
mod hero;

pub use cta::*;
pub use decor::*;
pub use hero::*;
