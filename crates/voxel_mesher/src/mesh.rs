//! Main meshing pipeline.
//!
//! Orchestrates the meshing of one chunk:
//! 1. Quad generation (sweep six plane directions with a merge strategy)
//! 2. Quad encoding (convert quads to vertex arrays)

use crate::core::Quad;
use crate::cull::DenseFaceSlice;
use crate::debug::{compute_direction_stats, generate_debug_geometry, DebugGeometry, FaceDirectionStats};
use crate::encode::{encode_quads, MeshBuffer};
use crate::error::Result;
use crate::grid::VoxelGrid;
use crate::merge::{binary_merge_plane, covered_area, culled_faces, naive_merge_plane, PLANE_SWEEPS};

/// Turns a cubic grid into a mesh.
///
/// Implementations only decide which quads cover the visible faces; encoding
/// is shared.
pub trait VoxelMesher: Send + Sync {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    /// Append quads covering every visible face of the grid.
    fn collect_quads(&self, grid: &VoxelGrid, output: &mut Vec<Quad>) -> Result<()>;

    /// Mesh a grid into a trimmed buffer.
    ///
    /// # Example
    /// ```
    /// use voxel_mesher::{patterns, BinaryGreedyMesher, VoxelMesher};
    ///
    /// let grid = patterns::filled(8);
    /// let mesh = BinaryGreedyMesher::new().build_chunk_mesh(&grid).unwrap();
    /// assert_eq!(mesh.triangle_count(), 12); // 6 merged faces × 2 triangles
    /// ```
    fn build_chunk_mesh(&self, grid: &VoxelGrid) -> Result<MeshBuffer> {
        if grid.is_empty() {
            return Ok(MeshBuffer::new());
        }
        let mut quads = Vec::new();
        self.collect_quads(grid, &mut quads)?;
        Ok(encode_quads(&quads, grid.width()))
    }

    /// Mesh a grid and return statistics alongside.
    fn build_chunk_mesh_with_stats(&self, grid: &VoxelGrid) -> Result<(MeshBuffer, MeshStats)> {
        if grid.is_empty() {
            return Ok((MeshBuffer::new(), MeshStats::default()));
        }
        let mut quads = Vec::new();
        self.collect_quads(grid, &mut quads)?;
        let mesh = encode_quads(&quads, grid.width());
        let stats = MeshStats::from_quads(&quads, &mesh);
        Ok((mesh, stats))
    }

    /// Mesh a grid and return full debug output.
    ///
    /// `origin` only shifts the debug wireframe; mesh positions stay
    /// chunk-local.
    fn build_chunk_mesh_debug(&self, grid: &VoxelGrid, origin: [f32; 3]) -> Result<MeshDebugOutput> {
        let mut quads = Vec::new();
        if !grid.is_empty() {
            self.collect_quads(grid, &mut quads)?;
        }
        let mesh = encode_quads(&quads, grid.width());
        let stats = MeshStats::from_quads(&quads, &mesh);
        Ok(MeshDebugOutput {
            mesh,
            stats,
            debug: generate_debug_geometry(&quads, grid.width(), origin),
            direction_stats: compute_direction_stats(&quads),
        })
    }
}

/// Dense per-cell greedy merge.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveGreedyMesher;

impl VoxelMesher for NaiveGreedyMesher {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn collect_quads(&self, grid: &VoxelGrid, output: &mut Vec<Quad>) -> Result<()> {
        let mut scratch = DenseFaceSlice::new(grid.width());
        for (axis, forward) in PLANE_SWEEPS {
            let before = output.len();
            naive_merge_plane(grid, axis, forward, &mut scratch, output);
            log::trace!("naive sweep {axis:?} forward={forward}: {} quads", output.len() - before);
        }
        Ok(())
    }
}

/// Bit-packed greedy merge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryGreedyMesher {
    /// Process grids wider than 32 in 32-row bands instead of failing.
    pub band_wide_slices: bool,
}

impl BinaryGreedyMesher {
    /// Mesher that rejects grids wider than 32.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mesher that bands grids wider than 32.
    pub fn banded() -> Self {
        Self {
            band_wide_slices: true,
        }
    }
}

impl VoxelMesher for BinaryGreedyMesher {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn collect_quads(&self, grid: &VoxelGrid, output: &mut Vec<Quad>) -> Result<()> {
        for (axis, forward) in PLANE_SWEEPS {
            let before = output.len();
            binary_merge_plane(grid, axis, forward, self.band_wide_slices, output)?;
            log::trace!("binary sweep {axis:?} forward={forward}: {} quads", output.len() - before);
        }
        Ok(())
    }
}

/// One quad per visible face.
#[derive(Clone, Copy, Debug, Default)]
pub struct CulledCubeMesher;

impl VoxelMesher for CulledCubeMesher {
    fn name(&self) -> &'static str {
        "culled"
    }

    fn collect_quads(&self, grid: &VoxelGrid, output: &mut Vec<Quad>) -> Result<()> {
        culled_faces(grid, output);
        Ok(())
    }
}

/// Statistics about a mesh result.
#[derive(Debug, Clone, Default)]
pub struct MeshStats {
    /// Total number of quads generated
    pub quad_count: usize,
    /// Quads per face direction, indexed by [`FaceId`](crate::core::FaceId)
    pub quads_per_face: [usize; 6],
    /// Unit faces covered (quads an unmerged mesher would emit)
    pub visible_faces: usize,
    /// Total vertices
    pub vertex_count: usize,
    /// Total triangles
    pub triangle_count: usize,
    /// Merge efficiency (1.0 - quads/visible_faces)
    pub merge_efficiency: f32,
}

impl MeshStats {
    /// Statistics for quads and the buffer they were encoded into.
    pub fn from_quads(quads: &[Quad], mesh: &MeshBuffer) -> Self {
        let mut quads_per_face = [0usize; 6];
        for quad in quads {
            quads_per_face[quad.face as usize] += 1;
        }
        let visible_faces = covered_area(quads);
        let merge_efficiency = if visible_faces > 0 {
            1.0 - (quads.len() as f32 / visible_faces as f32)
        } else {
            0.0
        };

        Self {
            quad_count: quads.len(),
            quads_per_face,
            visible_faces,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            merge_efficiency,
        }
    }
}

/// Debug output from meshing pipeline.
pub struct MeshDebugOutput {
    /// The mesh geometry
    pub mesh: MeshBuffer,
    /// Mesh statistics
    pub stats: MeshStats,
    /// Debug geometry (wireframes, colors)
    pub debug: DebugGeometry,
    /// Per-direction face statistics
    pub direction_stats: FaceDirectionStats,
}
