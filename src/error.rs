//! Error types for mesh assembly.
//!
//! Intersection queries never fail; only turning loader output into shapes can.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A face points past the end of the vertex list.
    #[error("face {face} references vertex {index}, but the mesh has {len} vertices")]
    VertexIndexOutOfRange { face: usize, index: usize, len: usize },

    /// The loader reported a failure instead of a mesh.
    #[error("mesh loading failed: {0}")]
    Load(String),

    /// The loader went away without sending anything.
    #[error("mesh loader disconnected before producing a mesh")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, MeshError>;
