//! Binary greedy merge.
//!
//! Each depth layer is packed into one `u32` per local X column. Runs of
//! visible faces along local Y are found with trailing-zero counts, then
//! grown along local X by AND-ing the run mask against the following columns.
//! Matching bits are cleared from those columns so they are not emitted again.
//!
//! This processes a whole 32-voxel column per bitwise operation.

use crate::core::{PlaneAxis, Quad, BINARY_SLICE_WIDTH};
use crate::cull::BinaryFaceSlice;
use crate::error::{MeshError, Result};
use crate::grid::VoxelGrid;

/// Binary greedy merge for one plane axis and direction across every layer.
///
/// Volumes wider than 32 are rejected unless `band_wide_slices` is set, in
/// which case each layer is processed in 32-row bands. Runs never cross a band
/// boundary, so banded output covers the same faces with possibly more quads.
///
/// # Errors
/// Returns [`MeshError::SliceTooWide`] for a width above 32 without banding.
pub fn binary_merge_plane(
    grid: &VoxelGrid,
    axis: PlaneAxis,
    forward: bool,
    band_wide_slices: bool,
    output: &mut Vec<Quad>,
) -> Result<()> {
    let width = grid.width();
    if width > BINARY_SLICE_WIDTH && !band_wide_slices {
        return Err(MeshError::SliceTooWide { width });
    }

    for depth in 0..width {
        for row_offset in (0..width).step_by(BINARY_SLICE_WIDTH) {
            let mut slice = BinaryFaceSlice::build_band(grid, axis, forward, depth, row_offset);
            merge_binary_slice(&mut slice, axis, forward, depth, output);
        }
    }

    Ok(())
}

/// Greedy merge of one packed slice. Consumes the slice's bits.
pub fn merge_binary_slice(
    slice: &mut BinaryFaceSlice,
    axis: PlaneAxis,
    forward: bool,
    depth: usize,
    output: &mut Vec<Quad>,
) {
    let rows = slice.rows();
    let row_offset = slice.row_offset();
    let columns = slice.columns_mut();
    let width = columns.len();

    for local_x in 0..width {
        let mut local_y = 0usize;
        while local_y < rows {
            // Skip empty faces: 0b...1100 >> 0 has two trailing zeros
            local_y += (columns[local_x] >> local_y).trailing_zeros() as usize;
            if local_y >= rows {
                break;
            }

            // Height of the run of ones starting at local_y
            let height = (!(columns[local_x] >> local_y)).trailing_zeros() as usize;

            // `height` ones, e.g. 0b0111 for height 3
            let mask = if height >= BINARY_SLICE_WIDTH {
                u32::MAX
            } else {
                u32::MAX >> (BINARY_SLICE_WIDTH - height)
            };
            let mask_offset = mask << local_y;

            // Grow along local X while the next column holds the whole run
            let mut run_width = 1;
            while local_x + run_width < width {
                let next_column = columns[local_x + run_width] >> local_y;
                if next_column & mask != mask {
                    break;
                }
                columns[local_x + run_width] &= !mask_offset;
                run_width += 1;
            }

            output.push(Quad::from_run(
                axis,
                forward,
                local_x,
                row_offset + local_y,
                depth,
                run_width,
                height,
            ));

            local_y += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FaceId;
    use crate::merge::covered_area;
    use crate::patterns;
    use glam::IVec3;

    fn merge(grid: &VoxelGrid, axis: PlaneAxis, forward: bool) -> Vec<Quad> {
        let mut quads = Vec::new();
        binary_merge_plane(grid, axis, forward, false, &mut quads).unwrap();
        quads
    }

    #[test]
    fn single_voxel_single_quad() {
        let mut grid = VoxelGrid::new(32);
        grid.set_value(10, 20, 30, 1.0);

        let quads = merge(&grid, PlaneAxis::YZ, false);
        assert_eq!(quads, vec![Quad::unit(FaceId::Left, IVec3::new(10, 20, 30))]);
    }

    #[test]
    fn full_column_uses_all_ones_mask() {
        let grid = patterns::filled(32);
        let quads = merge(&grid, PlaneAxis::XY, true);
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].area(), 32 * 32);
        assert_eq!(quads[0].c, IVec3::new(32, 32, 31));
    }

    #[test]
    fn runs_split_on_gaps() {
        // Column local_x=0 on the XY plane: bits 0..2 and 4..5 visible.
        let mut grid = VoxelGrid::new(8);
        for y in [0, 1, 4] {
            grid.set_value(0, y, 0, 1.0);
        }
        let quads = merge(&grid, PlaneAxis::XY, false);
        assert_eq!(quads.len(), 2);
        assert_eq!((quads[0].a, quads[0].c), (IVec3::new(0, 0, 0), IVec3::new(1, 2, 0)));
        assert_eq!((quads[1].a, quads[1].c), (IVec3::new(0, 4, 0), IVec3::new(1, 5, 0)));
    }

    #[test]
    fn width_grows_only_on_exact_match() {
        // x=0: rows 0..3, x=1: rows 0..3, x=2: rows 0..2
        let mut grid = VoxelGrid::new(8);
        for y in 0..3 {
            grid.set_value(0, y, 0, 1.0);
            grid.set_value(1, y, 0, 1.0);
        }
        for y in 0..2 {
            grid.set_value(2, y, 0, 1.0);
        }
        let quads = merge(&grid, PlaneAxis::XY, false);
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].c, IVec3::new(2, 3, 0));
        assert_eq!(quads[1].a, IVec3::new(2, 0, 0));
        assert_eq!(quads[1].c, IVec3::new(3, 2, 0));
    }

    #[test]
    fn consumed_bits_are_cleared_from_later_columns() {
        let mut grid = VoxelGrid::new(4);
        for x in 0..4 {
            grid.set_value(x, 1, 0, 1.0);
        }
        let mut slice = BinaryFaceSlice::build(&grid, PlaneAxis::XY, false, 0).unwrap();
        let mut quads = Vec::new();
        merge_binary_slice(&mut slice, PlaneAxis::XY, false, 0, &mut quads);
        assert_eq!(quads.len(), 1);
        assert_eq!(&slice.columns()[1..], &[0, 0, 0]);
    }

    #[test]
    fn wide_volume_requires_banding() {
        let grid = patterns::filled(40);
        let mut quads = Vec::new();
        let err = binary_merge_plane(&grid, PlaneAxis::XZ, true, false, &mut quads).unwrap_err();
        assert_eq!(err, MeshError::SliceTooWide { width: 40 });
        assert!(quads.is_empty());

        binary_merge_plane(&grid, PlaneAxis::XZ, true, true, &mut quads).unwrap();
        // One quad per band: rows 0..32 and 32..40
        assert_eq!(quads.len(), 2);
        assert_eq!(covered_area(&quads), 40 * 40);
    }

    #[test]
    fn small_volumes_are_supported() {
        let grid = patterns::slab(4, 2);
        let quads = merge(&grid, PlaneAxis::XZ, false);
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].area(), 16);
    }
}
