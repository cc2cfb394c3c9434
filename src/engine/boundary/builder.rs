use glam::Vec3;

use crate::engine::BoundaryError;
use crate::engine::boundary::{ActiveOutputs, BoundaryFetch, DisplayMode};
use crate::engine::graphics::{CpuMesh, LineGeometry, MeshFactory};

/// Result of building the boundary mesh for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshOutput {
    Built(CpuMesh),
    /// No boundary is available; the renderer should show nothing.
    Cleared,
    /// The points could not be turned into the quad layout.
    Invalid(BoundaryError),
}

impl MeshOutput {
    pub fn mesh(&self) -> Option<&CpuMesh> {
        match self {
            MeshOutput::Built(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&BoundaryError> {
        match self {
            MeshOutput::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Geometry payloads for the outputs a display mode asks for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryOutputs {
    pub line: Option<LineGeometry>,
    pub mesh: Option<MeshOutput>,
}

impl GeometryOutputs {
    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.mesh.is_none()
    }
}

/// Pure (points, mode) -> geometry transform. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryGeometryBuilder;

impl BoundaryGeometryBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_outputs(&self, points: &[Vec3], mode: DisplayMode) -> GeometryOutputs {
        let line = mode.shows_line().then(|| LineGeometry::from_points(points));
        let mesh = mode
            .shows_mesh()
            .then(|| match MeshFactory::boundary_quad(points) {
                Ok(mesh) => MeshOutput::Built(mesh),
                Err(err) => MeshOutput::Invalid(err),
            });

        GeometryOutputs { line, mesh }
    }

    /// Like `compute_outputs`, but an unavailable boundary yields empty payloads
    /// for every active output rather than an invalid mesh.
    pub fn compute_for_fetch(&self, fetch: &BoundaryFetch, mode: DisplayMode) -> GeometryOutputs {
        match fetch {
            BoundaryFetch::Available(polygon) => self.compute_outputs(polygon.points(), mode),
            BoundaryFetch::Unavailable => GeometryOutputs {
                line: mode.shows_line().then(LineGeometry::default),
                mesh: mode.shows_mesh().then_some(MeshOutput::Cleared),
            },
        }
    }

    pub fn active_outputs(&self, mode: DisplayMode) -> ActiveOutputs {
        ActiveOutputs {
            line_active: mode.shows_line(),
            mesh_active: mode.shows_mesh(),
        }
    }
}
