pub mod line;
pub mod mesh;
pub mod renderer;

pub use line::LineGeometry;
pub use mesh::{CpuMesh, MeshFactory, PrimitiveTopology};
pub use renderer::{BoundaryRenderer, RecordingRenderer};
