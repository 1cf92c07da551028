//! Response types for the site host.

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Whether the hero image was present in the dist directory at startup
    #[serde(rename = "heroImage")]
    pub hero_image: bool,
}

impl HealthResponse {
    pub fn ok(hero_image: bool) -> Self {
        Self {
            status: "ok".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            hero_image,
        }
    }
}
