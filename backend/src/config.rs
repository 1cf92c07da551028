//! Site host configuration.
//!
//! Values come from command-line flags, falling back to environment
//! variables (a `.env` file is loaded first by `main`) and then to the
//! defaults below.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{SiteError, SiteResult};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default location of the Trunk build output, relative to the workspace root.
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";

/// Entry page inside the dist directory.
pub const INDEX_FILE: &str = "index.html";

/// Image referenced by the hero section, served from the site root.
pub const HERO_IMAGE_FILE: &str = "modern-salon.jpg";

#[derive(Debug, Clone, Args)]
pub struct SiteConfig {
    /// Port to listen on
    #[arg(short, long, env = "SALON_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory containing the built frontend
    #[arg(short, long, env = "SALON_DIST_DIR", default_value = DEFAULT_DIST_DIR)]
    pub dist: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dist: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

impl SiteConfig {
    pub fn index_path(&self) -> PathBuf {
        self.dist.join(INDEX_FILE)
    }

    /// Port usable for serving. Port 0 would bind an unpredictable port.
    pub fn checked_port(&self) -> SiteResult<u16> {
        match self.port {
            0 => Err(SiteError::InvalidPort(0)),
            port => Ok(port),
        }
    }
}

/// What was found in a dist directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistReport {
    pub index: PathBuf,
    /// The hero image is optional; the page renders without it.
    pub hero_image: Option<PathBuf>,
}

/// Check that `dist` is servable: it must be a directory holding `index.html`.
pub fn inspect_dist(dist: &Path) -> SiteResult<DistReport> {
    if !dist.is_dir() {
        return Err(SiteError::MissingDist(dist.to_path_buf()));
    }

    let index = dist.join(INDEX_FILE);
    if !index.is_file() {
        return Err(SiteError::MissingIndex(dist.to_path_buf()));
    }

    let hero_image = Some(dist.join(HERO_IMAGE_FILE)).filter(|path| path.is_file());

    Ok(DistReport { index, hero_image })
}
