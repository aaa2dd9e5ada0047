//! Chunked meshing of large volumes.
//!
//! - [`ChunkCoord`]: chunk-space coordinates and their linear order
//! - [`ChunkPartitioner`]: splits a volume into cubic chunks and meshes each
//!   one independently, optionally on the rayon thread pool
//!
//! # Layout
//!
//! ```text
//! volume width W, chunk size C, n = ceil(W / C)
//!
//!   x ──►  (one z layer; rows are y)
//!  ┌─────┬─────┬───┐
//!  │ 0   │ 1   │ 2 │   index = cx + cy*n + cz*n*n
//!  ├─────┼─────┼───┤   origin = (cx, cy, cz) * C
//!  │ n   │ n+1 │   │
//!  ├─────┼─────┼───┤   last row/column zero-padded
//!  │     │     │   │   when C does not divide W
//!  └─────┴─────┴───┘
//! ```

pub mod coord;
pub mod partition;

pub use coord::ChunkCoord;
pub use partition::{ChunkMesh, ChunkPartitioner};
