//! playspace-bounds: turns a VR play-area boundary into line and mesh geometry.
//!
//! The tracked boundary arrives from an upstream source (OpenXR stage bounds, a
//! config file, a test fixture) and is pushed into a [`BoundaryFeed`]. A
//! [`BoundaryDisplay`] picks up the latest snapshot on the render thread, runs it
//! through the [`BoundaryGeometryBuilder`] and hands the result to a
//! [`BoundaryRenderer`].

pub mod engine;
pub mod utils;

pub use engine::boundary::{
    ActiveOutputs, BoundaryDisplay, BoundaryFeed, BoundaryFetch, BoundaryGeometryBuilder,
    BoundaryPolygon, BoundarySnapshot, BoundarySource, DisplayMode, FixedBoundarySource,
    GeometryOutputs, MeshOutput,
};
pub use engine::graphics::{BoundaryRenderer, CpuMesh, LineGeometry, MeshFactory, RecordingRenderer};
pub use engine::{BoundaryError, EngineError, EngineResult};
