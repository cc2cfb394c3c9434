use log::{debug, info, warn};

use crate::engine::boundary::{
    BoundaryFeed, BoundaryGeometryBuilder, BoundarySnapshot, DisplayMode, GeometryOutputs,
    MeshOutput,
};
use crate::engine::graphics::BoundaryRenderer;

/// Keeps a renderer in step with the latest boundary snapshot and display mode.
///
/// Contract / intent:
/// - Tracking callbacks never touch this type; they push into the shared [`BoundaryFeed`].
/// - The render thread calls [`BoundaryDisplay::sync`] once per frame (or after a push
///   notification) and [`BoundaryDisplay::set_display_mode`] when configuration changes.
/// - Renderer activation depends on the mode alone, never on whether geometry exists.
#[derive(Debug)]
pub struct BoundaryDisplay<R: BoundaryRenderer> {
    renderer: R,
    feed: BoundaryFeed,
    builder: BoundaryGeometryBuilder,
    mode: DisplayMode,
    applied_generation: Option<u64>,
    last_outputs: GeometryOutputs,
}

impl<R: BoundaryRenderer> BoundaryDisplay<R> {
    pub fn new(renderer: R, feed: BoundaryFeed, mode: DisplayMode) -> Self {
        let mut display = Self {
            renderer,
            feed,
            builder: BoundaryGeometryBuilder::new(),
            mode,
            applied_generation: None,
            last_outputs: GeometryOutputs::default(),
        };
        display.apply_mode();
        display.sync();
        display
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Handle for upstream callbacks.
    pub fn feed(&self) -> BoundaryFeed {
        self.feed.clone()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn last_outputs(&self) -> &GeometryOutputs {
        &self.last_outputs
    }

    /// Switch display mode. Calling again with the current mode does nothing.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if mode == self.mode {
            return;
        }
        info!("[BoundaryDisplay] display mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.apply_mode();

        let snapshot = self.feed.latest();
        self.render_snapshot(&snapshot);
    }

    /// Render the newest snapshot if it has not been applied yet.
    ///
    /// Returns `true` when geometry was recomputed.
    pub fn sync(&mut self) -> bool {
        let snapshot = self.feed.latest();
        if self.applied_generation == Some(snapshot.generation) {
            return false;
        }
        self.render_snapshot(&snapshot);
        true
    }

    fn apply_mode(&mut self) {
        let active = self.builder.active_outputs(self.mode);
        self.renderer.set_active(active);
    }

    fn render_snapshot(&mut self, snapshot: &BoundarySnapshot) {
        self.applied_generation = Some(snapshot.generation);

        if self.mode == DisplayMode::None {
            self.last_outputs = GeometryOutputs::default();
            return;
        }

        let outputs = self.builder.compute_for_fetch(&snapshot.fetch, self.mode);
        debug!(
            "[BoundaryDisplay] generation={} mode={:?} line={:?} mesh={}",
            snapshot.generation,
            self.mode,
            outputs.line.as_ref().map(|l| l.position_count()),
            match &outputs.mesh {
                Some(MeshOutput::Built(_)) => "built",
                Some(MeshOutput::Cleared) => "cleared",
                Some(MeshOutput::Invalid(_)) => "invalid",
                None => "-",
            }
        );

        if let Some(line) = &outputs.line {
            self.renderer.update_line(line);
        }

        match &outputs.mesh {
            Some(MeshOutput::Built(mesh)) => self.renderer.update_mesh(mesh),
            Some(MeshOutput::Cleared) => self.renderer.clear_mesh(),
            Some(MeshOutput::Invalid(err)) => {
                warn!("[BoundaryDisplay] boundary mesh skipped: {}", err);
                // The previous quad belongs to an older boundary.
                self.renderer.clear_mesh();
                self.renderer.reject_mesh(err);
            }
            None => {}
        }

        self.last_outputs = outputs;
    }
}
