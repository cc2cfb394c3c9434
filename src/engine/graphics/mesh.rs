//! CPU-side boundary mesh generation.
//!
//! These meshes are staging data: a rendering backend copies the buffers into
//! whatever vertex/index storage it owns. Nothing here touches a GPU.

use glam::{Vec2, Vec3};

use crate::engine::BoundaryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    TriangleList,
}

/// Number of boundary points the quad layout is built for.
pub const QUAD_VERTEX_COUNT: usize = 4;

/// Fixed UVs, one per quad corner in boundary winding order.
pub const QUAD_UVS: [Vec2; QUAD_VERTEX_COUNT] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 0.0),
];

// two triangles: (0,1,2) + (0,2,3)
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

pub const BOUNDARY_MESH_NAME: &str = "boundary_quad";

/// CPU-side mesh data.
///
/// Contract:
/// - `vertices`, `uvs` and `normals` are parallel buffers of equal length.
/// - `indices_u32` reference `vertices`, interpreted per `primitive_topology`.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuMesh {
    pub name: &'static str,
    pub vertices: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub indices_u32: Vec<u32>,
    pub primitive_topology: PrimitiveTopology,
}

impl CpuMesh {
    pub fn new(name: &'static str, vertices: Vec<Vec3>, uvs: Vec<Vec2>, indices_u32: Vec<u32>) -> Self {
        let normals = vec![Vec3::ZERO; vertices.len()];
        Self {
            name,
            vertices,
            uvs,
            normals,
            indices_u32,
            primitive_topology: PrimitiveTopology::TriangleList,
        }
    }

    pub fn index_count(&self) -> u32 {
        saturating_u32(self.indices_u32.len())
    }

    pub fn vertex_count(&self) -> u32 {
        saturating_u32(self.vertices.len())
    }

    /// True when buffer lengths agree and every index is in range.
    pub fn is_well_formed(&self) -> bool {
        let n = self.vertices.len();
        self.uvs.len() == n
            && self.normals.len() == n
            && self.indices_u32.len() % 3 == 0
            && self.indices_u32.iter().all(|&i| (i as usize) < n)
    }

    /// Recompute per-vertex normals from the triangle list.
    ///
    /// Face normals are accumulated unnormalised, so larger triangles weigh more,
    /// then each vertex sum is normalised. Vertices that only touch degenerate
    /// triangles end up with a zero normal.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for tri in self.indices_u32.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (Some(&a), Some(&b), Some(&c)) =
                (self.vertices.get(ia), self.vertices.get(ib), self.vertices.get(ic))
            else {
                continue;
            };

            let face = (b - a).cross(c - a);
            normals[ia] += face;
            normals[ib] += face;
            normals[ic] += face;
        }

        for n in normals.iter_mut() {
            *n = n.normalize_or_zero();
        }
        self.normals = normals;
    }
}

// Boundary sizes come from outside; clamp instead of wrapping.
fn saturating_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Procedural mesh constructors.
///
/// Winding order: triangles are counter-clockwise when seen from the side the
/// normal points to (right-handed cross product).
pub struct MeshFactory;

impl MeshFactory {
    /// Quad over exactly four boundary points, using the fixed UV and index layout.
    ///
    /// Any other point count is rejected instead of producing buffers whose
    /// vertex, UV and index counts disagree.
    pub fn boundary_quad(points: &[Vec3]) -> Result<CpuMesh, BoundaryError> {
        if points.len() != QUAD_VERTEX_COUNT {
            return Err(BoundaryError::InvalidMeshTopology {
                expected: QUAD_VERTEX_COUNT,
                found: points.len(),
            });
        }

        let mut mesh = CpuMesh::new(
            BOUNDARY_MESH_NAME,
            points.to_vec(),
            QUAD_UVS.to_vec(),
            QUAD_INDICES.to_vec(),
        );
        mesh.recalculate_normals();
        Ok(mesh)
    }
}
