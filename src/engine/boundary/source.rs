use glam::Vec3;

use crate::engine::boundary::BoundaryPolygon;

/// Outcome of asking the tracking system for the boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BoundaryFetch {
    Available(BoundaryPolygon),
    #[default]
    Unavailable,
}

impl BoundaryFetch {
    /// Build from the `(points, success)` pair a tracking API hands back.
    /// A failed query is unavailable no matter what ended up in `points`.
    pub fn from_points(points: Vec<Vec3>, success: bool) -> Self {
        if success {
            BoundaryFetch::Available(BoundaryPolygon::new(points))
        } else {
            BoundaryFetch::Unavailable
        }
    }

    pub fn polygon(&self) -> Option<&BoundaryPolygon> {
        match self {
            BoundaryFetch::Available(polygon) => Some(polygon),
            BoundaryFetch::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, BoundaryFetch::Available(_))
    }
}

/// Upstream provider of boundary points (tracking runtime, file, fixture).
pub trait BoundarySource {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    fn fetch_boundary(&self) -> BoundaryFetch;
}

/// Source that always reports the same polygon, or nothing.
#[derive(Debug, Clone)]
pub struct FixedBoundarySource {
    name: String,
    polygon: Option<BoundaryPolygon>,
}

impl FixedBoundarySource {
    pub fn new(name: impl Into<String>, polygon: Option<BoundaryPolygon>) -> Self {
        Self {
            name: name.into(),
            polygon,
        }
    }

    pub fn unavailable(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

impl BoundarySource for FixedBoundarySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_boundary(&self) -> BoundaryFetch {
        match &self.polygon {
            Some(polygon) => BoundaryFetch::Available(polygon.clone()),
            None => BoundaryFetch::Unavailable,
        }
    }
}
