//! JSON configuration for the boundary display.
//!
//! ```json
//! {
//!   "display_mode": "both",
//!   "boundary": [[0, 0, 0], [0, 0, 1], [1, 0, 1], [1, 0, 0]],
//!   "stage": { "width": 2.0, "depth": 2.5 }
//! }
//! ```
//!
//! Every field is optional. An explicit `boundary` wins over `stage`; with neither
//! the source reports no boundary.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::EngineResult;
use crate::engine::boundary::{BoundaryPolygon, DisplayMode, FixedBoundarySource};
use crate::engine::xr::stage_rect_points;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageExtent {
    pub width: f32,
    pub depth: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    pub display_mode: DisplayMode,
    pub boundary: Option<BoundaryPolygon>,
    pub stage: Option<StageExtent>,
}

impl BoundaryConfig {
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        debug!("[BoundaryConfig] loaded {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Boundary polygon described by this config, if any.
    pub fn polygon(&self) -> Option<BoundaryPolygon> {
        if let Some(polygon) = &self.boundary {
            return Some(polygon.clone());
        }
        self.stage.and_then(|s| stage_rect_points(s.width, s.depth))
    }

    pub fn source(&self) -> FixedBoundarySource {
        let name = if self.boundary.is_some() {
            "config-boundary"
        } else if self.stage.is_some() {
            "config-stage"
        } else {
            "config-empty"
        };
        FixedBoundarySource::new(name, self.polygon())
    }
}
