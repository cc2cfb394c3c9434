use glam::Vec3;

/// Polyline positions for a line renderer, in boundary winding order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGeometry {
    pub positions: Vec<Vec3>,
}

impl LineGeometry {
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    pub fn from_points(points: &[Vec3]) -> Self {
        Self::new(points.to_vec())
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
