//! Play-area boundary: data model plus the path from upstream points to renderer geometry.
//!
//! Flow:
//! - an upstream [`BoundarySource`] produces a [`BoundaryFetch`]
//! - the fetch is pushed into a [`BoundaryFeed`] (any thread)
//! - a [`BoundaryDisplay`] on the render thread picks up the newest snapshot,
//!   runs [`BoundaryGeometryBuilder`] and drives a renderer

pub mod builder;
pub mod display;
pub mod feed;
pub mod source;

#[cfg(test)]
mod display_tests;

pub use builder::{BoundaryGeometryBuilder, GeometryOutputs, MeshOutput};
pub use display::BoundaryDisplay;
pub use feed::{BoundaryFeed, BoundarySnapshot};
pub use source::{BoundaryFetch, BoundarySource, FixedBoundarySource};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Which boundary representation(s) to render.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Line,
    Mesh,
    Both,
    None,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Line,
        DisplayMode::Mesh,
        DisplayMode::Both,
        DisplayMode::None,
    ];

    #[inline]
    pub fn shows_line(self) -> bool {
        matches!(self, DisplayMode::Line | DisplayMode::Both)
    }

    #[inline]
    pub fn shows_mesh(self) -> bool {
        matches!(self, DisplayMode::Mesh | DisplayMode::Both)
    }
}

/// Which renderer objects should be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveOutputs {
    pub line_active: bool,
    pub mesh_active: bool,
}

/// Ordered boundary outline; insertion order is winding order.
///
/// Replaced wholesale whenever tracking reports a change. May be empty and may
/// contain repeated points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryPolygon {
    points: Vec<Vec3>,
}

impl BoundaryPolygon {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Vec3>> for BoundaryPolygon {
    fn from(points: Vec<Vec3>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Vec3> for BoundaryPolygon {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DisplayMode::Both).unwrap(), "\"both\"");
        let m: DisplayMode = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(m, DisplayMode::None);
    }

    #[test]
    fn display_mode_defaults_to_line() {
        assert_eq!(DisplayMode::default(), DisplayMode::Line);
    }

    #[test]
    fn polygon_keeps_insertion_order() {
        let poly: BoundaryPolygon = [Vec3::X, Vec3::Z, Vec3::X].into_iter().collect();
        assert_eq!(poly.points(), &[Vec3::X, Vec3::Z, Vec3::X]);
        assert_eq!(poly.len(), 3);
        assert!(!poly.is_empty());
        assert!(BoundaryPolygon::default().is_empty());
    }
}
