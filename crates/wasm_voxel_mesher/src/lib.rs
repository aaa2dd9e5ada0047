//! WASM bindings for the voxel mesher.
//!
//! Provides JavaScript-accessible functions for meshing dense occupancy grids.
//! Chunks are meshed sequentially; the browser main thread has no rayon pool.

use wasm_bindgen::prelude::*;
use voxel_mesher::{
    debug::DebugGeometry, ChunkMesh, ChunkPartitioner, MeshBuffer, MeshStrategy, MesherConfig,
    MeshError, VoxelGrid,
};

/// Mesh of one chunk returned to JavaScript.
///
/// Contains vertex data ready for use with Three.js BufferGeometry. Positions
/// are local to the chunk; add `origin` to place it in the volume.
#[wasm_bindgen]
pub struct ChunkMeshResult {
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
    face_tags: Vec<f32>,
    origin: [u32; 3],
}

#[wasm_bindgen]
impl ChunkMeshResult {
    /// Get vertex positions (3 floats per vertex).
    #[wasm_bindgen(getter)]
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Get vertex normals (3 floats per vertex).
    #[wasm_bindgen(getter)]
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Get triangle indices.
    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Get face tags (2 floats per vertex, both the face enumerant).
    #[wasm_bindgen(getter)]
    pub fn face_tags(&self) -> Vec<f32> {
        self.face_tags.clone()
    }

    /// Chunk origin in voxels as [x, y, z].
    #[wasm_bindgen(getter)]
    pub fn origin(&self) -> Vec<u32> {
        self.origin.to_vec()
    }

    /// Number of vertices in the mesh.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles in the mesh.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh is empty (no geometry).
    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl ChunkMeshResult {
    fn new(mesh: &MeshBuffer, origin: [usize; 3]) -> Self {
        Self {
            positions: bytemuck::cast_slice(mesh.positions()).to_vec(),
            normals: bytemuck::cast_slice(mesh.normals()).to_vec(),
            indices: mesh.indices().to_vec(),
            face_tags: bytemuck::cast_slice(mesh.face_tags()).to_vec(),
            origin: origin.map(|v| v as u32),
        }
    }
}

impl From<ChunkMesh> for ChunkMeshResult {
    fn from(chunk: ChunkMesh) -> Self {
        Self::new(&chunk.mesh, chunk.origin)
    }
}

fn build_grid(values: &[f32], width: u32) -> Result<VoxelGrid, MeshError> {
    VoxelGrid::from_values(values.to_vec(), width as usize)
}

fn build_config(chunk_size: u32, strategy: &str) -> Result<MesherConfig, MeshError> {
    Ok(MesherConfig::default()
        .with_chunk_size(chunk_size as usize)
        .with_strategy(strategy.parse::<MeshStrategy>()?)
        .with_band_wide_slices(true)
        .with_parallel(false))
}

/// Mesh the whole volume as a single chunk.
fn mesh_single(values: &[f32], width: u32, strategy: &str) -> Result<Vec<ChunkMesh>, MeshError> {
    let grid = build_grid(values, width)?;
    let partitioner = ChunkPartitioner::new(build_config(width, strategy)?);
    partitioner.partition(&grid)
}

/// Mesh a dense occupancy volume in chunks.
///
/// # Arguments
/// * `values` - Flat occupancy array of length `width³`, index `x + y*w + z*w²`
/// * `width` - Side length of the cubic volume
/// * `chunk_size` - Side length of each chunk (`1..=width`)
/// * `strategy` - `"naive"`, `"binary"` or `"culled"`
///
/// # Example (JavaScript)
/// ```javascript
/// const values = new Float32Array(64 * 64 * 64);
/// values.fill(1.0);
/// const chunks = mesh_voxel_volume(values, 64, 32, "binary");
/// ```
#[wasm_bindgen]
pub fn mesh_voxel_volume(
    values: &[f32],
    width: u32,
    chunk_size: u32,
    strategy: &str,
) -> Result<js_sys::Array, JsError> {
    let grid = build_grid(values, width)?;
    let partitioner = ChunkPartitioner::new(build_config(chunk_size, strategy)?);
    let chunks = partitioner.partition(&grid)?;
    log(&format!("meshed {} chunks with {strategy}", chunks.len()));

    let result = js_sys::Array::new();
    for chunk in chunks {
        result.push(&JsValue::from(ChunkMeshResult::from(chunk)));
    }
    Ok(result)
}

/// Mesh a dense occupancy volume as one chunk.
#[wasm_bindgen]
pub fn mesh_voxel_chunk(values: &[f32], width: u32, strategy: &str) -> Result<ChunkMeshResult, JsError> {
    let chunk = mesh_single(values, width, strategy)?
        .into_iter()
        .next()
        .ok_or_else(|| JsError::new("volume produced no chunk"))?;
    Ok(chunk.into())
}

/// Mesh statistics for debugging.
#[wasm_bindgen]
pub struct MeshStats {
    quad_count: usize,
    visible_faces: usize,
    vertex_count: usize,
    triangle_count: usize,
    merge_efficiency: f32,
}

#[wasm_bindgen]
impl MeshStats {
    #[wasm_bindgen(getter)]
    pub fn quad_count(&self) -> usize {
        self.quad_count
    }

    #[wasm_bindgen(getter)]
    pub fn visible_faces(&self) -> usize {
        self.visible_faces
    }

    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    #[wasm_bindgen(getter)]
    pub fn merge_efficiency(&self) -> f32 {
        self.merge_efficiency
    }
}

impl From<&voxel_mesher::MeshStats> for MeshStats {
    fn from(stats: &voxel_mesher::MeshStats) -> Self {
        Self {
            quad_count: stats.quad_count,
            visible_faces: stats.visible_faces,
            vertex_count: stats.vertex_count,
            triangle_count: stats.triangle_count,
            merge_efficiency: stats.merge_efficiency,
        }
    }
}

/// Mesh a volume as one chunk and return statistics along with the mesh.
///
/// Returns `[ChunkMeshResult, MeshStats]`.
#[wasm_bindgen]
pub fn mesh_voxel_chunk_with_stats(values: &[f32], width: u32, strategy: &str) -> Result<js_sys::Array, JsError> {
    let chunk = mesh_single(values, width, strategy)?
        .into_iter()
        .next()
        .ok_or_else(|| JsError::new("volume produced no chunk"))?;
    let mesh_stats = MeshStats::from(&chunk.stats);
    let mesh_result = ChunkMeshResult::from(chunk);

    let result = js_sys::Array::new();
    result.push(&JsValue::from(mesh_result));
    result.push(&JsValue::from(mesh_stats));
    Ok(result)
}

/// Debug output for greedy mesh visualization.
///
/// Contains the mesh, wireframe lines, per-vertex colors, and statistics.
#[wasm_bindgen]
pub struct MeshDebugResult {
    // Mesh data
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
    face_tags: Vec<f32>,
    // Wireframe line positions (pairs of xyz endpoints)
    wire_positions: Vec<f32>,
    // Per-vertex colors for face direction visualization
    face_colors: Vec<f32>,
    // Per-vertex colors for quad size heatmap
    size_colors: Vec<f32>,
    // Stats
    quad_count: usize,
    visible_faces: usize,
    merge_efficiency: f32,
    triangle_reduction: f32,
    // Per-direction counts indexed by face tag: [+Y, -Y, +X, -X, +Z, -Z]
    dir_quad_counts: [usize; 6],
    dir_face_counts: [usize; 6],
}

#[wasm_bindgen]
impl MeshDebugResult {
    #[wasm_bindgen(getter)]
    pub fn positions(&self) -> Vec<f32> { self.positions.clone() }

    #[wasm_bindgen(getter)]
    pub fn normals(&self) -> Vec<f32> { self.normals.clone() }

    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Vec<u32> { self.indices.clone() }

    #[wasm_bindgen(getter)]
    pub fn face_tags(&self) -> Vec<f32> { self.face_tags.clone() }

    #[wasm_bindgen(getter)]
    pub fn wire_positions(&self) -> Vec<f32> { self.wire_positions.clone() }

    #[wasm_bindgen(getter)]
    pub fn face_colors(&self) -> Vec<f32> { self.face_colors.clone() }

    #[wasm_bindgen(getter)]
    pub fn size_colors(&self) -> Vec<f32> { self.size_colors.clone() }

    #[wasm_bindgen(getter)]
    pub fn quad_count(&self) -> usize { self.quad_count }

    #[wasm_bindgen(getter)]
    pub fn visible_faces(&self) -> usize { self.visible_faces }

    #[wasm_bindgen(getter)]
    pub fn merge_efficiency(&self) -> f32 { self.merge_efficiency }

    #[wasm_bindgen(getter)]
    pub fn triangle_reduction(&self) -> f32 { self.triangle_reduction }

    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool { self.indices.is_empty() }

    /// Get per-direction quad counts as [+Y, -Y, +X, -X, +Z, -Z].
    #[wasm_bindgen(getter)]
    pub fn dir_quad_counts(&self) -> Vec<usize> { self.dir_quad_counts.to_vec() }

    /// Get per-direction face counts as [+Y, -Y, +X, -X, +Z, -Z].
    #[wasm_bindgen(getter)]
    pub fn dir_face_counts(&self) -> Vec<usize> { self.dir_face_counts.to_vec() }
}

fn debug_result(values: &[f32], width: u32, strategy: &str) -> Result<MeshDebugResult, MeshError> {
    let grid = build_grid(values, width)?;
    let config = build_config(width, strategy)?;
    config.validate(grid.width())?;
    let output = config.mesher().build_chunk_mesh_debug(&grid, [0.0; 3])?;
    let DebugGeometry {
        line_positions,
        face_colors,
        size_colors,
    } = output.debug;
    let mesh = ChunkMeshResult::new(&output.mesh, [0; 3]);

    Ok(MeshDebugResult {
        positions: mesh.positions,
        normals: mesh.normals,
        indices: mesh.indices,
        face_tags: mesh.face_tags,
        wire_positions: line_positions,
        face_colors,
        size_colors,
        quad_count: output.stats.quad_count,
        visible_faces: output.stats.visible_faces,
        merge_efficiency: output.stats.merge_efficiency,
        triangle_reduction: output.direction_stats.triangle_reduction,
        dir_quad_counts: output.direction_stats.quad_counts,
        dir_face_counts: output.direction_stats.face_counts,
    })
}

/// Mesh a volume as one chunk with full debug output.
///
/// Returns mesh geometry, wireframe lines for quad boundaries,
/// per-vertex colors for visualization modes, and detailed statistics.
#[wasm_bindgen]
pub fn mesh_voxel_chunk_debug(values: &[f32], width: u32, strategy: &str) -> Result<MeshDebugResult, JsError> {
    let result = debug_result(values, width, strategy)?;
    log(&format!("debug mesh: {} quads", result.quad_count));
    Ok(result)
}

// Logging support

thread_local! {
    static LOG_ENABLED: std::cell::Cell<bool> = std::cell::Cell::new(false);
}

/// Enable or disable console logging.
#[wasm_bindgen]
pub fn set_log_enabled(enabled: bool) {
    LOG_ENABLED.with(|flag| flag.set(enabled));
}

fn log(message: &str) {
    if LOG_ENABLED.with(|enabled| enabled.get()) {
        web_sys::console::log_1(&message.into());
    }
}

/// Get the version of the mesher library.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
