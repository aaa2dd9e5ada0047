//! Quad encoding into mesh buffers.
//!
//! Every quad becomes two flat-shaded triangles with unshared vertices:
//! positions, sequential indices, the triangle normal and the face tag are
//! written for each corner.

use glam::IVec3;

use crate::core::{FaceId, Quad, WORST_CASE_VERTICES_PER_VOXEL};

/// Output mesh data ready for GPU buffers.
///
/// All four channels are per vertex and always hold the same number of
/// entries; the index channel is `0, 1, 2, ...`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    normals: Vec<[f32; 3]>,
    face_tags: Vec<[f32; 2]>,
}

impl MeshBuffer {
    /// Create an empty buffer without reserving.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate capacity for a number of vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            face_tags: Vec::with_capacity(vertices),
        }
    }

    /// Pre-allocate the worst case for a chunk of the given width: every voxel
    /// showing all six faces as separate triangles.
    pub fn for_width(width: usize) -> Self {
        Self::with_capacity(worst_case_vertices(width))
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Triangle indices (3 per triangle).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Flat-shaded vertex normals.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Per-vertex face tags; both components hold the [`FaceId`] value.
    pub fn face_tags(&self) -> &[[f32; 2]] {
        &self.face_tags
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` slice.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as a flat slice.
    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Face tags as a flat slice.
    pub fn face_tags_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.face_tags)
    }

    /// Write cursor: number of vertices written so far.
    #[inline]
    pub fn write_pointer(&self) -> usize {
        self.positions.len()
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Clear all mesh data, keeping the allocation.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.indices.clear();
        self.normals.clear();
        self.face_tags.clear();
    }

    /// Trim every channel to the write cursor.
    pub fn finish(mut self) -> Self {
        self.positions.shrink_to_fit();
        self.indices.shrink_to_fit();
        self.normals.shrink_to_fit();
        self.face_tags.shrink_to_fit();
        self
    }
}

/// Worst-case vertex count for a cubic chunk of the given width.
pub fn worst_case_vertices(width: usize) -> usize {
    WORST_CASE_VERTICES_PER_VOXEL * width * width * width
}

/// Encode one triangle. Vertices are `corner + offset`; the normal is the
/// normalised `(b - a) × (c - a)`.
pub fn encode_triangle(buffer: &mut MeshBuffer, face: FaceId, offset: IVec3, a: IVec3, b: IVec3, c: IVec3) {
    let base = buffer.write_pointer() as u32;
    let normal = (b - a)
        .as_vec3()
        .cross((c - a).as_vec3())
        .normalize_or_zero()
        .to_array();
    let tag = face.tag();

    for (i, corner) in [a, b, c].into_iter().enumerate() {
        buffer.positions.push((corner + offset).as_vec3().to_array());
        buffer.indices.push(base + i as u32);
        buffer.normals.push(normal);
        buffer.face_tags.push([tag, tag]);
    }
}

/// Encode a quad as two triangles facing out of the solid side.
///
/// Quads wound from A emit `(A,B,C)+(A,C,D)`; the others emit the reversed
/// `(C,B,A)+(D,C,A)`. The choice follows [`PlaneAxis::winds_from_a`].
///
/// [`PlaneAxis::winds_from_a`]: crate::core::PlaneAxis::winds_from_a
pub fn encode_quad(buffer: &mut MeshBuffer, quad: &Quad) {
    let face = quad.face;
    let offset = face.plane_offset();

    if face.axis().winds_from_a(face.is_forward()) {
        encode_triangle(buffer, face, offset, quad.a, quad.b, quad.c);
        encode_triangle(buffer, face, offset, quad.a, quad.c, quad.d);
    } else {
        encode_triangle(buffer, face, offset, quad.c, quad.b, quad.a);
        encode_triangle(buffer, face, offset, quad.d, quad.c, quad.a);
    }
}

/// Encode every quad into a buffer pre-sized for a chunk of `width`, then trim.
pub fn encode_quads(quads: &[Quad], width: usize) -> MeshBuffer {
    let mut buffer = MeshBuffer::for_width(width);
    for quad in quads {
        encode_quad(&mut buffer, quad);
    }
    buffer.finish()
}
