//! Face visibility slices.
//!
//! A face is visible if the voxel is solid AND its neighbour one step along
//! the sweep direction is empty. One slice holds the visibility of every face
//! on a single depth layer of one plane axis, addressed by slice-local
//! `(local_x, local_y)`.
//!
//! Two layouts share the [`FaceVisibility`] contract:
//! - [`DenseFaceSlice`]: one `bool` per cell, reused as scratch by the naive
//!   merge.
//! - [`BinaryFaceSlice`]: one `u32` per local X column, bit `y` set when face
//!   `(x, y)` is visible. Feeds the bitwise merge.

use crate::core::{PlaneAxis, BINARY_SLICE_WIDTH};
use crate::error::{MeshError, Result};
use crate::grid::VoxelGrid;

/// Read access shared by both slice layouts.
pub trait FaceVisibility {
    /// Side length of the slice.
    fn width(&self) -> usize;

    /// Whether face `(local_x, local_y)` is visible.
    fn is_visible(&self, local_x: usize, local_y: usize) -> bool;

    /// Count visible faces in the slice.
    fn visible_count(&self) -> usize {
        let width = self.width();
        (0..width)
            .flat_map(|x| (0..width).map(move |y| (x, y)))
            .filter(|&(x, y)| self.is_visible(x, y))
            .count()
    }
}

/// Visible-face predicate for one slice-local cell.
#[inline]
pub fn face_visible(
    grid: &VoxelGrid,
    axis: PlaneAxis,
    forward: bool,
    local_x: usize,
    local_y: usize,
    depth: usize,
) -> bool {
    let step = if forward { 1 } else { -1 };
    let (x, y, d) = (local_x as i32, local_y as i32, depth as i32);
    grid.solid_at(axis.to_voxel(x, y, d)) && !grid.solid_at(axis.to_voxel(x, y, d + step))
}

/// Dense boolean face slice.
///
/// Memory layout: `cells[local_x * width + local_y]`.
#[derive(Clone, Debug)]
pub struct DenseFaceSlice {
    width: usize,
    cells: Vec<bool>,
}

impl DenseFaceSlice {
    /// Create an empty slice.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            cells: vec![false; width * width],
        }
    }

    /// Build the slice for one layer.
    pub fn build(grid: &VoxelGrid, axis: PlaneAxis, forward: bool, depth: usize) -> Self {
        let mut slice = Self::new(grid.width());
        slice.refill(grid, axis, forward, depth);
        slice
    }

    /// Clear and recompute the slice for another layer.
    ///
    /// The slice keeps its allocation, so one buffer can serve every depth.
    pub fn refill(&mut self, grid: &VoxelGrid, axis: PlaneAxis, forward: bool, depth: usize) {
        let width = grid.width();
        if width != self.width {
            self.width = width;
            self.cells.resize(width * width, false);
        }
        for local_x in 0..width {
            let row = local_x * width;
            for local_y in 0..width {
                self.cells[row + local_y] = face_visible(grid, axis, forward, local_x, local_y, depth);
            }
        }
    }

    /// Mark a face as consumed so it is not emitted again.
    #[inline]
    pub fn consume(&mut self, local_x: usize, local_y: usize) {
        self.cells[local_x * self.width + local_y] = false;
    }
}

impl FaceVisibility for DenseFaceSlice {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn is_visible(&self, local_x: usize, local_y: usize) -> bool {
        self.cells[local_x * self.width + local_y]
    }

    fn visible_count(&self) -> usize {
        self.cells.iter().filter(|&&visible| visible).count()
    }
}

/// Bit-packed face slice.
///
/// `columns[local_x]` holds one bit per local Y. A slice covers at most 32
/// rows; wider volumes are cut into bands starting at `row_offset`.
#[derive(Clone, Debug)]
pub struct BinaryFaceSlice {
    width: usize,
    rows: usize,
    row_offset: usize,
    columns: Vec<u32>,
}

impl BinaryFaceSlice {
    /// Build the packed slice for a volume of width at most 32.
    ///
    /// # Errors
    /// Returns [`MeshError::SliceTooWide`] for wider volumes; callers must
    /// band them with [`build_band`](Self::build_band) instead.
    pub fn build(grid: &VoxelGrid, axis: PlaneAxis, forward: bool, depth: usize) -> Result<Self> {
        if grid.width() > BINARY_SLICE_WIDTH {
            return Err(MeshError::SliceTooWide { width: grid.width() });
        }
        Ok(Self::build_band(grid, axis, forward, depth, 0))
    }

    /// Build the 32-row band of a slice starting at `row_offset`.
    ///
    /// Bit `i` of each column represents local Y `row_offset + i`.
    pub fn build_band(
        grid: &VoxelGrid,
        axis: PlaneAxis,
        forward: bool,
        depth: usize,
        row_offset: usize,
    ) -> Self {
        let width = grid.width();
        let rows = width.saturating_sub(row_offset).min(BINARY_SLICE_WIDTH);
        let mut columns = vec![0u32; width];

        for (local_x, column) in columns.iter_mut().enumerate() {
            for bit in 0..rows {
                let visible = face_visible(grid, axis, forward, local_x, row_offset + bit, depth);
                *column |= (visible as u32) << bit;
            }
        }

        Self {
            width,
            rows,
            row_offset,
            columns,
        }
    }

    /// Rows held by this band (at most 32).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Local Y of bit 0.
    #[inline]
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Packed column words, one per local X.
    #[inline]
    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    /// Mutable column words; the bitwise merge clears consumed runs in place.
    #[inline]
    pub fn columns_mut(&mut self) -> &mut [u32] {
        &mut self.columns
    }
}

impl FaceVisibility for BinaryFaceSlice {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn is_visible(&self, local_x: usize, local_y: usize) -> bool {
        if local_y < self.row_offset || local_y >= self.row_offset + self.rows {
            return false;
        }
        (self.columns[local_x] >> (local_y - self.row_offset)) & 1 != 0
    }

    fn visible_count(&self) -> usize {
        self.columns.iter().map(|c| c.count_ones() as usize).sum()
    }
}
