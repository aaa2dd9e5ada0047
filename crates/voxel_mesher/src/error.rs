//! Error type shared by every meshing entry point.

use thiserror::Error;

/// Contract violations that abort a mesh build.
///
/// Out-of-bounds voxel queries are not errors; they read as empty.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("occupancy buffer holds {actual} values, expected {expected} (width³)")]
    VolumeSizeMismatch { expected: usize, actual: usize },

    #[error("binary slices hold at most 32 voxels per column, got width {width}")]
    SliceTooWide { width: usize },

    #[error("chunk size {chunk_size} is invalid for a volume of width {width}")]
    InvalidChunkSize { chunk_size: usize, width: usize },

    #[error("invalid plane axis enumerant: {0}")]
    InvalidAxis(u8),

    #[error("invalid face enumerant: {0}")]
    InvalidFace(u8),

    #[error("unknown mesh strategy: {0:?}")]
    UnknownStrategy(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MeshError>;
