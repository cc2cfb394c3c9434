pub mod boundary;
pub mod cli;
pub mod config;
pub mod graphics;
pub mod xr;

use thiserror::Error;

/// Failures local to boundary geometry. Always reported back as values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// The upstream source could not provide boundary points.
    #[error("no boundary data available from '{source_name}'")]
    NoBoundaryData { source_name: String },

    /// The quad mesh layout needs a fixed number of points.
    #[error("boundary mesh expects {expected} points, found {found}")]
    InvalidMeshTopology { expected: usize, found: usize },
}

/// Engine-level error type for the outer surfaces (config, CLI, XR).
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error("XR error: {0}")]
    Xr(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
