//! Debug geometry and coverage checks for greedy mesh visualization.
//!
//! Generates wireframe lines showing quad boundaries, per-vertex colors for
//! face direction and merge size, and rasterizes quads back onto unit faces so
//! a mesh can be compared against the boundary faces of its grid.

use glam::IVec3;

use crate::core::{FaceId, Quad};
use crate::grid::VoxelGrid;

/// Debug output containing wireframe lines and per-vertex colors.
pub struct DebugGeometry {
    /// Wireframe line positions (pairs of xyz endpoints).
    /// Length = quad_count * 4 edges * 2 endpoints * 3 floats = quad_count * 24.
    pub line_positions: Vec<f32>,

    /// Per-vertex face-direction colors matching the encoded mesh (RGB).
    /// Length = quad_count * 6 vertices * 3 floats.
    pub face_colors: Vec<f32>,

    /// Per-vertex quad-size heatmap colors: small quads red, large green.
    pub size_colors: Vec<f32>,
}

/// Face direction colors, indexed by [`FaceId`].
const DIR_COLORS: [[f32; 3]; 6] = [
    [0.2, 0.9, 0.2], // Top = green
    [0.1, 0.5, 0.1], // Bottom = dark green
    [0.9, 0.2, 0.2], // Right = red
    [0.5, 0.1, 0.1], // Left = dark red
    [0.2, 0.2, 0.9], // Front = blue
    [0.1, 0.1, 0.5], // Back = dark blue
];

/// Map quad area to a red → green heatmap on a log scale relative to a full
/// `width × width` layer.
fn size_color(area: usize, width: usize) -> [f32; 3] {
    let max_log = ((width * width).max(2) as f32).ln();
    let t = ((area.max(1) as f32).ln() / max_log).clamp(0.0, 1.0);
    [1.0 - t, t, 0.1]
}

/// Quad corners lifted onto their rendered plane and shifted by `origin`.
fn rendered_corners(quad: &Quad, origin: [f32; 3]) -> [[f32; 3]; 4] {
    let offset = quad.face.plane_offset();
    let origin = glam::Vec3::from_array(origin);
    [quad.a, quad.b, quad.c, quad.d].map(|corner| ((corner + offset).as_vec3() + origin).to_array())
}

/// Generate debug geometry for a chunk's quads.
///
/// # Arguments
/// * `quads` - Quads emitted for the chunk
/// * `width` - Chunk width, used to scale the size heatmap
/// * `origin` - World position offset for the chunk
pub fn generate_debug_geometry(quads: &[Quad], width: usize, origin: [f32; 3]) -> DebugGeometry {
    let mut line_positions = Vec::with_capacity(quads.len() * 24);
    let mut face_colors = Vec::with_capacity(quads.len() * 18);
    let mut size_colors = Vec::with_capacity(quads.len() * 18);

    for quad in quads {
        let corners = rendered_corners(quad, origin);

        // Wireframe edges: 0→1, 1→2, 2→3, 3→0
        for i in 0..4 {
            line_positions.extend_from_slice(&corners[i]);
            line_positions.extend_from_slice(&corners[(i + 1) % 4]);
        }

        let dir_color = DIR_COLORS[quad.face as usize];
        let sc = size_color(quad.area(), width);
        for _ in 0..6 {
            face_colors.extend_from_slice(&dir_color);
            size_colors.extend_from_slice(&sc);
        }
    }

    DebugGeometry {
        line_positions,
        face_colors,
        size_colors,
    }
}

/// Per-direction face statistics.
#[derive(Debug, Clone, Default)]
pub struct FaceDirectionStats {
    /// Unit faces covered per direction, indexed by [`FaceId`].
    pub face_counts: [usize; 6],
    /// Quads per direction, indexed by [`FaceId`].
    pub quad_counts: [usize; 6],
    /// Total faces before merging
    pub total_faces: usize,
    /// Total quads after merging
    pub total_quads: usize,
    /// Triangle count without merging (2 per face)
    pub unmerged_triangles: usize,
    /// Merged triangle count (2 per quad)
    pub merged_triangles: usize,
    /// Triangle reduction ratio (unmerged / merged)
    pub triangle_reduction: f32,
}

/// Compute per-direction statistics from a chunk's quads.
pub fn compute_direction_stats(quads: &[Quad]) -> FaceDirectionStats {
    let mut stats = FaceDirectionStats::default();

    for quad in quads {
        let face = quad.face as usize;
        stats.quad_counts[face] += 1;
        stats.face_counts[face] += quad.area();
    }

    stats.total_faces = stats.face_counts.iter().sum();
    stats.total_quads = quads.len();
    stats.unmerged_triangles = stats.total_faces * 2;
    stats.merged_triangles = stats.total_quads * 2;
    stats.triangle_reduction = if stats.merged_triangles > 0 {
        stats.unmerged_triangles as f32 / stats.merged_triangles as f32
    } else {
        0.0
    };

    stats
}

/// How many times each unit face of a volume is covered.
///
/// Memory layout: `counts[face * width³ + x + y * width + z * width²]`, with
/// the face owned by the solid voxel it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceCoverage {
    width: usize,
    counts: Vec<u16>,
    /// Quad cells that fell outside the volume.
    pub outside: usize,
}

impl FaceCoverage {
    fn new(width: usize) -> Self {
        Self {
            width,
            counts: vec![0; 6 * width * width * width],
            outside: 0,
        }
    }

    fn slot(&self, face: FaceId, voxel: IVec3) -> Option<usize> {
        let w = self.width as i32;
        if voxel.cmplt(IVec3::ZERO).any() || voxel.cmpge(IVec3::splat(w)).any() {
            return None;
        }
        let (x, y, z) = (voxel.x as usize, voxel.y as usize, voxel.z as usize);
        let volume = self.width * self.width * self.width;
        Some(face as usize * volume + x + y * self.width + z * self.width * self.width)
    }

    /// Rasterize quads onto unit faces.
    pub fn from_quads(width: usize, quads: &[Quad]) -> Self {
        let mut coverage = Self::new(width);
        for quad in quads {
            let (min, max) = quad.bounds();
            for z in min.z..max.z {
                for y in min.y..max.y {
                    for x in min.x..max.x {
                        match coverage.slot(quad.face, IVec3::new(x, y, z)) {
                            Some(slot) => coverage.counts[slot] += 1,
                            None => coverage.outside += 1,
                        }
                    }
                }
            }
        }
        coverage
    }

    /// Every boundary face of a grid: solid voxel, empty neighbour.
    pub fn boundary_faces(grid: &VoxelGrid) -> Self {
        let width = grid.width();
        let mut coverage = Self::new(width);
        let w = width as i32;
        for z in 0..w {
            for y in 0..w {
                for x in 0..w {
                    let voxel = IVec3::new(x, y, z);
                    if !grid.solid_at(voxel) {
                        continue;
                    }
                    for face in FaceId::ALL {
                        if !grid.solid_at(voxel + face.outward()) {
                            if let Some(slot) = coverage.slot(face, voxel) {
                                coverage.counts[slot] = 1;
                            }
                        }
                    }
                }
            }
        }
        coverage
    }

    /// Coverage count of one face of one voxel; 0 outside the volume.
    pub fn count(&self, face: FaceId, voxel: IVec3) -> u16 {
        self.slot(face, voxel).map_or(0, |slot| self.counts[slot])
    }

    /// Unit faces covered at least once for a direction.
    pub fn area(&self, face: FaceId) -> usize {
        let volume = self.width * self.width * self.width;
        let start = face as usize * volume;
        self.counts[start..start + volume].iter().filter(|&&c| c > 0).count()
    }

    /// Largest coverage count of any face.
    pub fn max_overlap(&self) -> u16 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    #[test]
    fn wireframe_single_quad() {
        let quads = [Quad::unit(FaceId::Top, IVec3::new(1, 1, 1))];
        let debug = generate_debug_geometry(&quads, 8, [0.0, 0.0, 0.0]);

        // 1 quad → 4 edges → 8 endpoints → 24 floats
        assert_eq!(debug.line_positions.len(), 24);
        // 1 quad → 6 vertices → 18 floats per color array
        assert_eq!(debug.face_colors.len(), 18);
        assert_eq!(debug.size_colors.len(), 18);
        // Top faces are drawn on the far plane
        assert!(debug.line_positions.chunks(3).all(|p| p[1] == 2.0));
    }

    #[test]
    fn wireframe_origin_offset() {
        let quads = [Quad::unit(FaceId::Back, IVec3::ZERO)];
        let debug = generate_debug_geometry(&quads, 8, [32.0, 0.0, 64.0]);
        assert!(debug.line_positions.chunks(3).all(|p| p[0] >= 32.0 && p[2] == 64.0));
    }

    #[test]
    fn face_colors_match_direction() {
        let quads = [Quad::unit(FaceId::Right, IVec3::ZERO)];
        let debug = generate_debug_geometry(&quads, 8, [0.0; 3]);
        for color in debug.face_colors.chunks(3) {
            assert_eq!(color, DIR_COLORS[FaceId::Right as usize]);
        }
    }

    #[test]
    fn size_color_small_is_red_large_is_green() {
        let small = size_color(1, 32);
        assert!(small[0] > 0.9 && small[1] < 0.1);
        let large = size_color(32 * 32, 32);
        assert!(large[0] < 0.1 && large[1] > 0.9);
    }

    #[test]
    fn direction_stats() {
        let quads = [
            Quad::from_run(crate::core::PlaneAxis::XZ, true, 0, 0, 0, 10, 10),
            Quad::from_run(crate::core::PlaneAxis::XZ, false, 0, 0, 0, 5, 5),
            Quad::from_run(crate::core::PlaneAxis::XZ, false, 5, 0, 0, 5, 5),
        ];
        let stats = compute_direction_stats(&quads);

        assert_eq!(stats.quad_counts[FaceId::Top as usize], 1);
        assert_eq!(stats.quad_counts[FaceId::Bottom as usize], 2);
        assert_eq!(stats.face_counts[FaceId::Top as usize], 100);
        assert_eq!(stats.face_counts[FaceId::Bottom as usize], 50);
        assert_eq!(stats.total_quads, 3);
        assert_eq!(stats.total_faces, 150);
        assert_eq!(stats.unmerged_triangles, 300);
        assert_eq!(stats.merged_triangles, 6);
        assert!(stats.triangle_reduction > 49.0);
    }

    #[test]
    fn boundary_faces_of_slab() {
        let grid = patterns::slab(4, 2);
        let expected = FaceCoverage::boundary_faces(&grid);
        assert_eq!(expected.area(FaceId::Top), 16);
        assert_eq!(expected.area(FaceId::Bottom), 16);
        for face in [FaceId::Right, FaceId::Left, FaceId::Front, FaceId::Back] {
            assert_eq!(expected.area(face), 4);
        }
        assert_eq!(expected.count(FaceId::Top, IVec3::new(0, 2, 0)), 1);
        assert_eq!(expected.count(FaceId::Top, IVec3::new(0, 1, 0)), 0);
    }

    #[test]
    fn overlapping_quads_are_counted() {
        let quads = [
            Quad::from_run(crate::core::PlaneAxis::XY, true, 0, 0, 1, 2, 2),
            Quad::unit(FaceId::Front, IVec3::new(1, 1, 1)),
        ];
        let coverage = FaceCoverage::from_quads(4, &quads);
        assert_eq!(coverage.max_overlap(), 2);
        assert_eq!(coverage.count(FaceId::Front, IVec3::new(1, 1, 1)), 2);
        assert_eq!(coverage.area(FaceId::Front), 4);
        assert_eq!(coverage.outside, 0);
    }

    #[test]
    fn quads_outside_volume_are_reported() {
        let quads = [Quad::unit(FaceId::Top, IVec3::new(4, 0, 0))];
        let coverage = FaceCoverage::from_quads(4, &quads);
        assert_eq!(coverage.outside, 1);
        assert_eq!(coverage.max_overlap(), 0);
    }
}
