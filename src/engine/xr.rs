//! OpenXR side of the boundary: stage bounds as a polygon.
//!
//! OpenXR reports the play area as an axis-aligned rectangle on the floor of the
//! STAGE reference space, centered on its origin. That is exactly four corners,
//! which is what the quad mesh layout expects.

use glam::Vec3;

use crate::engine::boundary::BoundaryPolygon;

/// Corners of a `width` x `depth` stage rectangle on the floor (y = 0).
///
/// Winding matches the fixed quad UVs: (-x,-z) (-x,+z) (+x,+z) (+x,-z), which
/// gives upward normals. Returns `None` for empty or non-finite extents.
pub fn stage_rect_points(width: f32, depth: f32) -> Option<BoundaryPolygon> {
    if !(width.is_finite() && depth.is_finite()) || width <= 0.0 || depth <= 0.0 {
        return None;
    }

    let hx = width * 0.5;
    let hz = depth * 0.5;
    Some(BoundaryPolygon::new(vec![
        Vec3::new(-hx, 0.0, -hz),
        Vec3::new(-hx, 0.0, hz),
        Vec3::new(hx, 0.0, hz),
        Vec3::new(hx, 0.0, -hz),
    ]))
}

#[cfg(feature = "xr")]
pub use session::{XrBoundarySource, is_boundary_change};

#[cfg(feature = "xr")]
mod session {
    use log::{debug, warn};
    use openxr as xr;

    use super::stage_rect_points;
    use crate::engine::boundary::{BoundaryFetch, BoundarySource};

    /// Boundary source backed by a running OpenXR session.
    ///
    /// The session is created and driven elsewhere; this only queries stage bounds.
    pub struct XrBoundarySource<G: xr::Graphics> {
        session: xr::Session<G>,
    }

    impl<G: xr::Graphics> XrBoundarySource<G> {
        pub fn new(session: xr::Session<G>) -> Self {
            Self { session }
        }
    }

    impl<G: xr::Graphics> BoundarySource for XrBoundarySource<G> {
        fn name(&self) -> &str {
            "openxr-stage"
        }

        fn fetch_boundary(&self) -> BoundaryFetch {
            match self
                .session
                .reference_space_bounds_rect(xr::ReferenceSpaceType::STAGE)
            {
                Ok(Some(extent)) => {
                    debug!(
                        "[XrBoundarySource] stage bounds {}x{}",
                        extent.width, extent.height
                    );
                    match stage_rect_points(extent.width, extent.height) {
                        Some(polygon) => BoundaryFetch::Available(polygon),
                        None => BoundaryFetch::Unavailable,
                    }
                }
                Ok(None) => BoundaryFetch::Unavailable,
                Err(err) => {
                    warn!("[XrBoundarySource] stage bounds query failed: {}", err);
                    BoundaryFetch::Unavailable
                }
            }
        }
    }

    /// True for events after which stage bounds should be fetched again.
    pub fn is_boundary_change(event: &xr::Event<'_>) -> bool {
        match event {
            xr::Event::ReferenceSpaceChangePending(e) => {
                e.reference_space_type() == xr::ReferenceSpaceType::STAGE
            }
            _ => false,
        }
    }
}
