//! # Salon Site - static host for the Beta Salon landing page
//!
//! Serves the Leptos frontend built by Trunk, together with the hero image.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────────────┐
//! │   Browser   │────▶│    axum     │────▶│  frontend/dist/     │
//! │             │◀────│  ServeDir   │◀────│  index.html, wasm,  │
//! └─────────────┘     │  + /health  │     │  modern-salon.jpg   │
//!                     └─────────────┘     └─────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - CLI/env configuration and dist inspection
//! - [`api`] - HTTP server

pub mod api;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::types::HealthResponse;
pub use config::{inspect_dist, DistReport, SiteConfig};
pub use error::{SiteError, SiteResult};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
