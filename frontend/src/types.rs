//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Animation States** - two-state entrance machine, button interaction states
//! - **Error Types** - DOM plumbing failures

use std::fmt;
use wasm_bindgen::JsValue;

// =============================================================================
// Animation States
// =============================================================================

/// Entrance state of an animated element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Initial, pre-entrance pose
    #[default]
    Hidden,
    /// Settled pose after the entrance transition
    Visible,
}

impl Visibility {
    pub fn from_entered(entered: bool) -> Self {
        if entered {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

/// Interaction state of the call-to-action button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    /// No pointer interaction
    #[default]
    Initial,
    /// Pointer over the button
    Hover,
    /// Pointer pressed on the button
    Tap,
}

impl ButtonState {
    /// Resolve the state from pointer signals. Pressing wins over hovering.
    pub fn from_pointer(hovered: bool, pressed: bool) -> Self {
        match (hovered, pressed) {
            (_, true) => ButtonState::Tap,
            (true, false) => ButtonState::Hover,
            (false, false) => ButtonState::Initial,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// A DOM call (listener registration, style write) was rejected.
    Dom(String),
    /// A browser global (`window`, `document`) is not available.
    Environment(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
            AppError::Environment(msg) => write!(f, "Environment error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
