//! Occupancy patterns for tests, demos and benchmarks.

use crate::grid::VoxelGrid;

/// One full horizontal layer at height `y`.
pub fn slab(width: usize, y: usize) -> VoxelGrid {
    VoxelGrid::from_fn(width, |_, cell_y, _| if cell_y == y { 1.0 } else { 0.0 })
}

/// Grid planes: a cell is solid when any coordinate is a multiple of `spacing`.
///
/// A `spacing` of 0 is treated as 1 (everything solid).
pub fn lattice(width: usize, spacing: usize) -> VoxelGrid {
    let spacing = spacing.max(1);
    VoxelGrid::from_fn(width, |x, y, z| {
        if x % spacing == 0 || y % spacing == 0 || z % spacing == 0 {
            1.0
        } else {
            0.0
        }
    })
}

/// Every cell solid.
pub fn filled(width: usize) -> VoxelGrid {
    VoxelGrid::from_fn(width, |_, _, _| 1.0)
}

/// Ball centred in the volume, radius half the width.
pub fn sphere(width: usize) -> VoxelGrid {
    let center = width as f32 / 2.0;
    let radius_sq = center * center;
    VoxelGrid::from_fn(width, |x, y, z| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let dz = z as f32 + 0.5 - center;
        if dx * dx + dy * dy + dz * dz <= radius_sq {
            1.0
        } else {
            0.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slab_fills_one_layer() {
        let grid = slab(4, 2);
        assert_eq!(grid.solid_count(), 16);
        assert!(grid.solid(3, 2, 3));
        assert!(grid.empty(3, 1, 3));
    }

    #[test]
    fn lattice_marks_multiples() {
        let grid = lattice(20, 10);
        assert!(grid.solid(0, 5, 5));
        assert!(grid.solid(5, 10, 5));
        assert!(grid.empty(5, 5, 5));
        assert!(lattice(3, 0).solid_count() == 27);
    }

    #[test]
    fn sphere_centre_solid_corners_empty() {
        let grid = sphere(16);
        assert!(grid.solid(8, 8, 8));
        assert!(grid.empty(0, 0, 0));
        assert!(grid.solid_count() < 16 * 16 * 16);
    }
}
