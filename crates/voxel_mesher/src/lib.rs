//! Greedy meshing for dense voxel occupancy grids.
//!
//! A cubic grid of `f32` occupancy values (solid above 0.5) is swept along
//! each plane axis in both directions. Visible faces on every depth layer are
//! merged into rectangles and encoded as flat-shaded triangles with a per-vertex
//! face tag. Large volumes are split into chunks that mesh independently.
//!
//! # Example
//!
//! ```
//! use voxel_mesher::{patterns, ChunkPartitioner, MeshStrategy, MesherConfig};
//!
//! let grid = patterns::slab(4, 2); // one solid layer at y = 2
//! let config = MesherConfig::default()
//!     .with_chunk_size(4)
//!     .with_strategy(MeshStrategy::Naive);
//!
//! let chunks = ChunkPartitioner::new(config).partition(&grid).unwrap();
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].mesh.triangle_count(), 12); // 6 merged quads
//! ```

pub mod core;
pub mod error;
pub mod grid;
pub mod cull;
pub mod merge;
pub mod encode;
pub mod mesh;
pub mod chunk;
pub mod config;
pub mod debug;
pub mod patterns;

// Re-export primary types
pub use crate::core::{
    FaceId,
    PlaneAxis,
    Quad,
    // Constants
    SOLID_THRESHOLD, BINARY_SLICE_WIDTH, WORST_CASE_VERTICES_PER_VOXEL,
};
pub use crate::error::{MeshError, Result};
pub use crate::grid::VoxelGrid;
pub use crate::encode::MeshBuffer;
pub use crate::config::{MeshStrategy, MesherConfig};

// Re-export main entry points
pub use crate::mesh::{
    VoxelMesher, NaiveGreedyMesher, BinaryGreedyMesher, CulledCubeMesher,
    MeshStats, MeshDebugOutput,
};
pub use crate::chunk::{ChunkCoord, ChunkMesh, ChunkPartitioner};
