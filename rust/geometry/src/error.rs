use thiserror::Error;
use volmap_core::CubeId;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building volumetric geometry
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cube {} has {vertex_count} corners, expected 8", cube_id.0)]
    IncompleteCube { cube_id: CubeId, vertex_count: usize },

    #[error("Invalid OBJ data at line {line}: {message}")]
    InvalidObj { line: usize, message: String },

    #[error("Empty mesh: {0}")]
    EmptyMesh(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table error: {0}")]
    CoreError(#[from] volmap_core::Error),
}
