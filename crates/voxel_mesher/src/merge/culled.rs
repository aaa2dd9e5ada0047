//! Culled cubes: one unit quad per visible face, no merging.
//!
//! Baseline for merge efficiency and a cross-check for the greedy strategies.

use glam::IVec3;

use crate::core::{FaceId, Quad};
use crate::grid::VoxelGrid;

/// Emit a unit quad for every face whose neighbour is empty.
pub fn culled_faces(grid: &VoxelGrid, output: &mut Vec<Quad>) {
    let width = grid.width() as i32;
    for x in 0..width {
        for y in 0..width {
            for z in 0..width {
                let voxel = IVec3::new(x, y, z);
                if !grid.solid_at(voxel) {
                    continue;
                }
                for face in FaceId::ALL {
                    if !grid.solid_at(voxel + face.outward()) {
                        output.push(Quad::unit(face, voxel));
                    }
                }
            }
        }
    }
}
