//! Naive greedy merge.
//!
//! For every depth layer the dense scratch slice is refilled from the grid.
//! Cells are scanned with local X outer and local Y inner. From each visible
//! cell the run first grows along local X, then along local Y for as long as
//! the entire X width is still visible. Accepted cells are consumed in the
//! scratch slice so later scans skip them.
//!
//! X-first growth is not an optimal rectangle cover: a taller rectangle
//! reachable by growing Y first may be split into several quads.

use crate::core::{PlaneAxis, Quad};
use crate::cull::{DenseFaceSlice, FaceVisibility};
use crate::grid::VoxelGrid;

/// Greedy merge for one plane axis and direction across every depth layer.
///
/// `scratch` is cleared and refilled per layer; it can be shared between
/// calls on the same thread but never between threads.
pub fn naive_merge_plane(
    grid: &VoxelGrid,
    axis: PlaneAxis,
    forward: bool,
    scratch: &mut DenseFaceSlice,
    output: &mut Vec<Quad>,
) {
    let width = grid.width();

    for depth in 0..width {
        scratch.refill(grid, axis, forward, depth);

        for local_x in 0..width {
            for local_y in 0..width {
                if !scratch.is_visible(local_x, local_y) {
                    continue;
                }
                scratch.consume(local_x, local_y);

                // Extend along local X
                let mut max_x_fill = 1;
                while local_x + max_x_fill < width && scratch.is_visible(local_x + max_x_fill, local_y) {
                    scratch.consume(local_x + max_x_fill, local_y);
                    max_x_fill += 1;
                }

                // Extend along local Y; every column of the X run must match
                let mut max_y_fill = 1;
                while local_y + max_y_fill < width {
                    let travel_y = local_y + max_y_fill;
                    let run = local_x..local_x + max_x_fill;
                    if !run.clone().all(|travel_x| scratch.is_visible(travel_x, travel_y)) {
                        break;
                    }
                    for travel_x in run {
                        scratch.consume(travel_x, travel_y);
                    }
                    max_y_fill += 1;
                }

                output.push(Quad::from_run(
                    axis, forward, local_x, local_y, depth, max_x_fill, max_y_fill,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FaceId;
    use crate::patterns;
    use glam::IVec3;

    fn merge(grid: &VoxelGrid, axis: PlaneAxis, forward: bool) -> Vec<Quad> {
        let mut scratch = DenseFaceSlice::new(grid.width());
        let mut quads = Vec::new();
        naive_merge_plane(grid, axis, forward, &mut scratch, &mut quads);
        quads
    }

    #[test]
    fn single_voxel_single_quad() {
        let mut grid = VoxelGrid::new(8);
        grid.set_value(3, 4, 5, 1.0);

        let quads = merge(&grid, PlaneAxis::XZ, true);
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0], Quad::unit(FaceId::Top, IVec3::new(3, 4, 5)));
    }

    #[test]
    fn slab_merges_to_one_quad() {
        let grid = patterns::slab(8, 3);
        let quads = merge(&grid, PlaneAxis::XZ, true);
        assert_eq!(quads.len(), 1, "8x8 slab should merge to 1 quad");
        assert_eq!(quads[0].area(), 64);
        assert_eq!(quads[0].a, IVec3::new(0, 3, 0));
        assert_eq!(quads[0].c, IVec3::new(8, 3, 8));
    }

    #[test]
    fn row_merges_along_local_x() {
        let mut grid = VoxelGrid::new(8);
        for x in 2..7 {
            grid.set_value(x, 1, 1, 1.0);
        }
        let quads = merge(&grid, PlaneAxis::XY, false);
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].b - quads[0].a, IVec3::new(5, 0, 0));
        assert_eq!(quads[0].d - quads[0].a, IVec3::new(0, 1, 0));
    }

    #[test]
    fn partial_row_stops_y_growth() {
        // Local footprint on the XY plane:
        // y=1: X X .
        // y=0: X X X
        let mut grid = VoxelGrid::new(4);
        for x in 0..3 {
            grid.set_value(x, 0, 0, 1.0);
        }
        grid.set_value(0, 1, 0, 1.0);
        grid.set_value(1, 1, 0, 1.0);

        let quads = merge(&grid, PlaneAxis::XY, false);
        // The 3-wide run at y=0 cannot grow into the 2-wide row above.
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].area(), 3);
        assert_eq!(quads[1].area(), 2);
    }

    #[test]
    fn x_run_is_claimed_before_y_run() {
        // y=1: X .
        // y=0: X X
        // The bottom row is claimed as a 2x1 run, leaving the top cell alone.
        let mut grid = VoxelGrid::new(3);
        grid.set_value(0, 0, 0, 1.0);
        grid.set_value(1, 0, 0, 1.0);
        grid.set_value(0, 1, 0, 1.0);

        let quads = merge(&grid, PlaneAxis::XY, false);
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].a, IVec3::new(0, 0, 0));
        assert_eq!(quads[0].c, IVec3::new(2, 1, 0));
        assert_eq!(quads[1].a, IVec3::new(0, 1, 0));
        assert_eq!(quads[1].c, IVec3::new(1, 2, 0));
    }

    #[test]
    fn layers_do_not_suppress_each_other() {
        // Two separated slabs: consuming the lower one must not hide the upper.
        let mut grid = patterns::slab(4, 0);
        for x in 0..4 {
            for z in 0..4 {
                grid.set_value(x, 2, z, 1.0);
            }
        }
        let quads = merge(&grid, PlaneAxis::XZ, true);
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].a.y, 0);
        assert_eq!(quads[1].a.y, 2);
    }
}
