//! Volume partitioning into independently meshed chunks.

use rayon::prelude::*;

use super::coord::ChunkCoord;
use crate::config::MesherConfig;
use crate::encode::MeshBuffer;
use crate::error::Result;
use crate::grid::VoxelGrid;
use crate::mesh::{MeshStats, VoxelMesher};

/// Mesh of one chunk, positions local to the chunk.
#[derive(Clone, Debug)]
pub struct ChunkMesh {
    /// Chunk-space coordinate.
    pub coord: ChunkCoord,
    /// Voxel-space origin; add it to positions for world placement.
    pub origin: [usize; 3],
    pub mesh: MeshBuffer,
    pub stats: MeshStats,
}

/// Splits a volume into cubic chunks and meshes each one.
///
/// Chunks hanging over the volume's far edge are zero-padded, so every chunk
/// is `chunk_size` wide and the volume boundary reads as open space.
pub struct ChunkPartitioner {
    config: MesherConfig,
    mesher: Box<dyn VoxelMesher>,
}

impl ChunkPartitioner {
    /// Create a partitioner for the configured strategy.
    pub fn new(config: MesherConfig) -> Self {
        let mesher = config.mesher();
        Self { config, mesher }
    }

    /// Active configuration.
    pub fn config(&self) -> &MesherConfig {
        &self.config
    }

    /// `ceil(width / chunk_size)`.
    pub fn chunks_per_axis(&self, width: usize) -> usize {
        width.div_ceil(self.config.chunk_size.max(1))
    }

    /// Mesh a single chunk.
    pub fn mesh_chunk(&self, grid: &VoxelGrid, coord: ChunkCoord) -> Result<ChunkMesh> {
        let size = self.config.chunk_size;
        let origin = coord.world_origin(size);
        let sub = grid.extract_subgrid(origin, size);
        let (mesh, stats) = self.mesher.build_chunk_mesh_with_stats(&sub)?;
        log::debug!("chunk {origin:?}: {} quads, {} vertices", stats.quad_count, mesh.vertex_count());
        Ok(ChunkMesh {
            coord,
            origin,
            mesh,
            stats,
        })
    }

    /// Mesh every chunk of the volume.
    ///
    /// Output is ordered by [`ChunkCoord::index`]. The first failing chunk
    /// fails the whole call.
    ///
    /// # Errors
    /// Returns [`MeshError::InvalidChunkSize`](crate::MeshError::InvalidChunkSize)
    /// for a chunk size outside `1..=width`, or whatever the strategy returns.
    pub fn partition(&self, grid: &VoxelGrid) -> Result<Vec<ChunkMesh>> {
        self.config.validate(grid.width())?;

        let n = self.chunks_per_axis(grid.width());
        let total = n * n * n;
        log::debug!(
            "partitioning {}³ into {total} chunks of {} ({}, parallel={})",
            grid.width(),
            self.config.chunk_size,
            self.mesher.name(),
            self.config.parallel,
        );

        if self.config.parallel {
            (0..total)
                .into_par_iter()
                .map(|index| self.mesh_chunk(grid, ChunkCoord::from_index(index, n)))
                .collect()
        } else {
            (0..total)
                .map(|index| self.mesh_chunk(grid, ChunkCoord::from_index(index, n)))
                .collect()
        }
    }
}
