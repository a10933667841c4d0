//! Optional TOML settings file.
//!
//! ```toml
//! [roam]
//! seed       = 7
//! population = 30
//!
//! [campus]
//! width  = 12
//! height = 6
//! carve  = { from_x = 7, up_to_y = 2 }
//! ```
//!
//! Every key is optional; anything missing keeps its default.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use roam_core::RoamConfig;
use roam_grid::CarvedRect;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub roam: RoamConfig,
    pub campus: CarvedRect,
}

impl Settings {
    /// Defaults when `path` is `None`, otherwise the parsed file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
