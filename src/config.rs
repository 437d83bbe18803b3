//! Render options and their on-disk persistence
//!
//! [`RenderOptions`] carries the user-facing drawing toggles a chart panel
//! honors per redraw. The options persist as a small JSON file so a session
//! reopens the way it was left; the viewport itself is deliberately not
//! persisted, every session starts at full view.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ResultExt, WearVisError};

fn default_true() -> bool {
    true
}

/// Drawing toggles honored by [`ChartModel::render`](crate::ChartModel::render)
///
/// Unknown or missing fields in a saved file fall back to the defaults, so
/// files written by older builds keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Draw the axis grids behind the data
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Draw a marker at every resampled vertex, not just the polyline
    #[serde(default)]
    pub show_markers: bool,
    /// Draw the unit text next to the axis labels
    #[serde(default = "default_true")]
    pub show_units: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_markers: false,
            show_units: true,
        }
    }
}

impl RenderOptions {
    /// Load options from a JSON file
    ///
    /// A missing file is not an error and yields the defaults; an unreadable
    /// or malformed file is.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(WearVisError::from)
            .with_context(|| format!("failed to read options file {}", path.display()))?;
        serde_json::from_str(&content)
            .map_err(|e| WearVisError::Config(format!("malformed options file: {e}")))
    }

    /// Load options, falling back to the defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(options) => options,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "using default render options");
                Self::default()
            }
        }
    }

    /// Save options as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| WearVisError::Config(format!("failed to serialize options: {e}")))?;
        std::fs::write(path, content)
            .map_err(WearVisError::from)
            .with_context(|| format!("failed to write options file {}", path.display()))
    }
}
