#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::engine::BoundaryError;
    use crate::engine::boundary::{
        ActiveOutputs, BoundaryDisplay, BoundaryFeed, BoundaryFetch, BoundaryPolygon, DisplayMode,
        FixedBoundarySource, MeshOutput,
    };
    use crate::engine::graphics::RecordingRenderer;

    fn floor_square() -> BoundaryPolygon {
        BoundaryPolygon::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ])
    }

    fn triangle() -> BoundaryPolygon {
        BoundaryPolygon::new(vec![Vec3::ZERO, Vec3::Z, Vec3::X])
    }

    #[test]
    fn new_applies_activation_before_any_boundary() {
        let d = BoundaryDisplay::new(RecordingRenderer::new(), BoundaryFeed::new(), DisplayMode::Both);
        let r = d.renderer();

        assert_eq!(
            r.active,
            ActiveOutputs {
                line_active: true,
                mesh_active: true
            }
        );
        // Nothing pushed yet: empty outputs, no error.
        assert!(r.line.as_ref().unwrap().is_empty());
        assert!(r.mesh.is_none());
        assert!(r.last_rejection.is_none());
        assert_eq!(d.last_outputs().mesh, Some(MeshOutput::Cleared));
    }

    #[test]
    fn sync_renders_pushed_boundary_once() {
        let mut d = BoundaryDisplay::new(RecordingRenderer::new(), BoundaryFeed::new(), DisplayMode::Both);
        let feed = d.feed();

        feed.push(BoundaryFetch::Available(floor_square()));
        assert!(d.sync());
        assert!(!d.sync());

        let r = d.renderer();
        assert_eq!(r.line.as_ref().unwrap().positions, floor_square().points());
        let mesh = r.mesh.as_ref().unwrap();
        assert_eq!(mesh.vertices, floor_square().points());
        assert_eq!(mesh.indices_u32, vec![0, 1, 2, 0, 2, 3]);
        // initial (empty) + pushed
        assert_eq!(r.line_updates, 2);
        assert_eq!(r.mesh_updates, 2);
    }

    #[test]
    fn latest_push_wins() {
        let mut d = BoundaryDisplay::new(RecordingRenderer::new(), BoundaryFeed::new(), DisplayMode::Line);
        let feed = d.feed();

        feed.push(BoundaryFetch::Available(triangle()));
        feed.push(BoundaryFetch::Available(floor_square()));
        d.sync();

        assert_eq!(d.renderer().line.as_ref().unwrap().position_count(), 4);
        assert_eq!(d.renderer().line_updates, 2);
    }

    #[test]
    fn redundant_mode_change_does_no_work() {
        let feed = BoundaryFeed::new();
        feed.push(BoundaryFetch::Available(floor_square()));
        let mut d = BoundaryDisplay::new(RecordingRenderer::new(), feed, DisplayMode::Line);
        let before = d.renderer().line_updates;

        d.set_display_mode(DisplayMode::Line);
        d.set_display_mode(DisplayMode::Line);

        assert_eq!(d.renderer().line_updates, before);
    }

    #[test]
    fn mode_change_recomputes_immediately() {
        let feed = BoundaryFeed::new();
        feed.push(BoundaryFetch::Available(floor_square()));
        let mut d = BoundaryDisplay::new(RecordingRenderer::new(), feed, DisplayMode::Line);
        assert!(d.renderer().mesh.is_none());

        d.set_display_mode(DisplayMode::Mesh);

        let r = d.renderer();
        assert_eq!(
            r.active,
            ActiveOutputs {
                line_active: false,
                mesh_active: true
            }
        );
        assert!(r.mesh.is_some());
        assert_eq!(d.mode(), DisplayMode::Mesh);
    }

    #[test]
    fn none_mode_disables_everything_and_skips_geometry() {
        let feed = BoundaryFeed::new();
        feed.push(BoundaryFetch::Available(floor_square()));
        let mut d = BoundaryDisplay::new(RecordingRenderer::new(), feed.clone(), DisplayMode::None);

        assert_eq!(d.renderer().active, ActiveOutputs::default());
        assert_eq!(d.renderer().line_updates, 0);
        assert_eq!(d.renderer().mesh_updates, 0);

        feed.push(BoundaryFetch::Available(triangle()));
        assert!(d.sync());
        assert_eq!(d.renderer().line_updates, 0);
        assert!(d.last_outputs().is_empty());
    }

    #[test]
    fn invalid_mesh_still_updates_line() {
        let feed = BoundaryFeed::new();
        feed.push(BoundaryFetch::Available(triangle()));
        let d = BoundaryDisplay::new(RecordingRenderer::new(), feed, DisplayMode::Both);
        let r = d.renderer();

        assert_eq!(r.line.as_ref().unwrap().position_count(), 3);
        assert!(r.mesh.is_none());
        assert_eq!(
            r.last_rejection,
            Some(BoundaryError::InvalidMeshTopology {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn rejected_mesh_drops_previous_one() {
        let feed = BoundaryFeed::new();
        feed.push(BoundaryFetch::Available(floor_square()));
        let mut d = BoundaryDisplay::new(RecordingRenderer::new(), feed.clone(), DisplayMode::Mesh);
        assert!(d.renderer().mesh.is_some());

        feed.push(BoundaryFetch::Available(triangle()));
        d.sync();

        let r = d.renderer();
        assert!(r.mesh.is_none());
        assert_eq!(
            r.last_rejection,
            Some(BoundaryError::InvalidMeshTopology {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn empty_boundary_after_square_clears_mesh_and_line() {
        let feed = BoundaryFeed::new();
        feed.push(BoundaryFetch::Available(floor_square()));
        let mut d = BoundaryDisplay::new(RecordingRenderer::new(), feed.clone(), DisplayMode::Both);

        feed.push(BoundaryFetch::from_points(Vec::new(), true));
        assert!(d.sync());

        let r = d.renderer();
        assert_eq!(r.line.as_ref().unwrap().position_count(), 0);
        assert!(r.mesh.is_none());
        assert_eq!(
            r.last_rejection,
            Some(BoundaryError::InvalidMeshTopology {
                expected: 4,
                found: 0
            })
        );
    }

    #[test]
    fn lost_boundary_clears_outputs() {
        let feed = BoundaryFeed::new();
        feed.push(BoundaryFetch::Available(floor_square()));
        let mut d = BoundaryDisplay::new(RecordingRenderer::new(), feed.clone(), DisplayMode::Both);
        assert!(d.renderer().mesh.is_some());

        feed.refresh_from(&FixedBoundarySource::unavailable("tracking"));
        d.sync();

        let r = d.renderer();
        assert!(r.line.as_ref().unwrap().is_empty());
        assert!(r.mesh.is_none());
    }

    #[test]
    fn push_from_tracking_thread_reaches_render_thread() {
        let mut d = BoundaryDisplay::new(RecordingRenderer::new(), BoundaryFeed::new(), DisplayMode::Both);
        let feed = d.feed();

        std::thread::spawn(move || {
            feed.push(BoundaryFetch::from_points(floor_square().points().to_vec(), true));
        })
        .join()
        .unwrap();

        assert!(d.sync());
        let renderer = d.into_renderer();
        assert_eq!(renderer.mesh.unwrap().vertex_count(), 4);
    }
}
