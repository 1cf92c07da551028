//! Error types for the site host.
//!
//! - [`SiteError`] - configuration, filesystem and server errors
//!
//! `std::io::Error` converts automatically, so `?` works on bind/serve
//! and filesystem calls.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while checking or serving the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Socket or filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The build output directory does not exist.
    #[error("Dist directory not found: {}", .0.display())]
    MissingDist(PathBuf),

    /// The build output has no entry page.
    #[error("No index.html in {} (run `trunk build` in frontend/)", .0.display())]
    MissingIndex(PathBuf),

    /// The configured port cannot be served on.
    #[error("Invalid port: {0}")]
    InvalidPort(u16),
}

/// Result type for site operations.
pub type SiteResult<T> = Result<T, SiteError>;
