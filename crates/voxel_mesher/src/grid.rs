//! Dense cubic occupancy grid.

use glam::IVec3;

use crate::core::SOLID_THRESHOLD;
use crate::error::{MeshError, Result};

/// Cubic volume of occupancy values.
///
/// Memory layout: `values[x + y * width + z * width * width]`.
/// Any coordinate outside `[0, width)` on any axis reads as empty, so the
/// exterior of the volume behaves as open space.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid {
    width: usize,
    values: Vec<f32>,
}

impl VoxelGrid {
    /// Create an all-empty grid.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            values: vec![0.0; width * width * width],
        }
    }

    /// Wrap an existing occupancy buffer.
    ///
    /// # Errors
    /// Returns [`MeshError::VolumeSizeMismatch`] if `values.len() != width³`.
    pub fn from_values(values: Vec<f32>, width: usize) -> Result<Self> {
        let expected = width * width * width;
        if values.len() != expected {
            return Err(MeshError::VolumeSizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { width, values })
    }

    /// Build a grid by evaluating `f(x, y, z)` for every cell.
    pub fn from_fn(width: usize, mut f: impl FnMut(usize, usize, usize) -> f32) -> Self {
        let mut grid = Self::new(width);
        for z in 0..width {
            for y in 0..width {
                for x in 0..width {
                    let index = grid.index(x, y, z);
                    grid.values[index] = f(x, y, z);
                }
            }
        }
        grid
    }

    /// Side length of the cube.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raw occupancy values in row-major order.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.width + z * self.width * self.width
    }

    /// Whether a coordinate lies outside the volume.
    #[inline]
    pub fn out_of_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        let w = self.width as i64;
        let (x, y, z) = (x as i64, y as i64, z as i64);
        x < 0 || y < 0 || z < 0 || x >= w || y >= w || z >= w
    }

    /// Occupancy value at a coordinate; 0 outside the volume.
    #[inline]
    pub fn value(&self, x: i32, y: i32, z: i32) -> f32 {
        if self.out_of_bounds(x, y, z) {
            return 0.0;
        }
        self.values[self.index(x as usize, y as usize, z as usize)]
    }

    /// Overwrite a value. Writes outside the volume are ignored.
    #[inline]
    pub fn set_value(&mut self, x: i32, y: i32, z: i32, value: f32) {
        if self.out_of_bounds(x, y, z) {
            return;
        }
        let index = self.index(x as usize, y as usize, z as usize);
        self.values[index] = value;
    }

    /// Check if a voxel is solid (value above 0.5). False out of bounds.
    #[inline]
    pub fn solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.value(x, y, z) > SOLID_THRESHOLD
    }

    /// Negation of [`solid`](Self::solid).
    #[inline]
    pub fn empty(&self, x: i32, y: i32, z: i32) -> bool {
        !self.solid(x, y, z)
    }

    /// [`solid`](Self::solid) taking a vector coordinate.
    #[inline]
    pub fn solid_at(&self, voxel: IVec3) -> bool {
        self.solid(voxel.x, voxel.y, voxel.z)
    }

    /// Count solid voxels.
    pub fn solid_count(&self) -> usize {
        self.values.iter().filter(|&&v| v > SOLID_THRESHOLD).count()
    }

    /// Check if the grid holds no solid voxel.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|&v| v <= SOLID_THRESHOLD)
    }

    /// Copy a `size³` window starting at `origin`.
    ///
    /// Source cells outside the volume read as 0, so windows hanging over the
    /// edge come back zero-padded.
    pub fn extract_subgrid(&self, origin: [usize; 3], size: usize) -> VoxelGrid {
        let mut sub = VoxelGrid::new(size);
        for sub_z in 0..size {
            let z = origin[2] + sub_z;
            if z >= self.width {
                break;
            }
            for sub_y in 0..size {
                let y = origin[1] + sub_y;
                if y >= self.width {
                    break;
                }
                for sub_x in 0..size {
                    let x = origin[0] + sub_x;
                    if x >= self.width {
                        break;
                    }
                    let dst = sub.index(sub_x, sub_y, sub_z);
                    sub.values[dst] = self.values[self.index(x, y, z)];
                }
            }
        }
        sub
    }
}
