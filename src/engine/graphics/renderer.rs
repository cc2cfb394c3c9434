// Downstream side of the boundary pipeline.
// NOTE: actual GPU upload/draw lives in whatever backend implements `BoundaryRenderer`.

use crate::engine::BoundaryError;
use crate::engine::boundary::ActiveOutputs;
use crate::engine::graphics::{CpuMesh, LineGeometry};

/// Rendering backend that owns the boundary's line and mesh objects.
///
/// Calls arrive on the thread that owns the render loop.
pub trait BoundaryRenderer {
    /// Enable or disable the line and mesh objects.
    fn set_active(&mut self, active: ActiveOutputs);

    fn update_line(&mut self, line: &LineGeometry);

    fn update_mesh(&mut self, mesh: &CpuMesh);

    /// Drop any mesh currently shown (boundary no longer available).
    fn clear_mesh(&mut self);

    /// The requested mesh could not be built. Called right after `clear_mesh`.
    fn reject_mesh(&mut self, _reason: &BoundaryError) {}
}

/// CPU-only renderer that keeps the latest state it was given.
///
/// Backs the demo binary and the controller tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub active: ActiveOutputs,
    pub line: Option<LineGeometry>,
    pub mesh: Option<CpuMesh>,
    pub last_rejection: Option<BoundaryError>,
    pub line_updates: usize,
    pub mesh_updates: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoundaryRenderer for RecordingRenderer {
    fn set_active(&mut self, active: ActiveOutputs) {
        self.active = active;
    }

    fn update_line(&mut self, line: &LineGeometry) {
        self.line = Some(line.clone());
        self.line_updates += 1;
    }

    fn update_mesh(&mut self, mesh: &CpuMesh) {
        self.mesh = Some(mesh.clone());
        self.last_rejection = None;
        self.mesh_updates += 1;
    }

    fn clear_mesh(&mut self) {
        self.mesh = None;
        self.mesh_updates += 1;
    }

    fn reject_mesh(&mut self, reason: &BoundaryError) {
        self.last_rejection = Some(reason.clone());
    }
}
