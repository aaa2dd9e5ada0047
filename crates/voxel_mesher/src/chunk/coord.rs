//! Chunk coordinate type for chunk-space addressing.

/// Chunk coordinate in chunk-space (not voxel-space).
///
/// A volume of width `W` split into chunks of size `C` has
/// `ceil(W / C)` chunks per axis, so coordinates are never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl ChunkCoord {
    /// Origin chunk at (0, 0, 0).
    pub const ZERO: ChunkCoord = ChunkCoord { x: 0, y: 0, z: 0 };

    /// Create a new chunk coordinate.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Voxel-space origin (minimum corner) of this chunk.
    ///
    /// # Example
    /// ```
    /// use voxel_mesher::chunk::ChunkCoord;
    ///
    /// assert_eq!(ChunkCoord::new(1, 0, 2).world_origin(16), [16, 0, 32]);
    /// ```
    pub fn world_origin(&self, chunk_size: usize) -> [usize; 3] {
        [
            self.x as usize * chunk_size,
            self.y as usize * chunk_size,
            self.z as usize * chunk_size,
        ]
    }

    /// Linear index `x + y * n + z * n * n` for `n` chunks per axis.
    pub fn index(&self, chunks_per_axis: usize) -> usize {
        let n = chunks_per_axis;
        self.x as usize + self.y as usize * n + self.z as usize * n * n
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: usize, chunks_per_axis: usize) -> Self {
        let n = chunks_per_axis;
        Self {
            x: (index % n) as u32,
            y: (index / n % n) as u32,
            z: (index / (n * n)) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_constant() {
        assert_eq!(ChunkCoord::ZERO, ChunkCoord::new(0, 0, 0));
        assert_eq!(ChunkCoord::ZERO.world_origin(32), [0, 0, 0]);
    }

    #[test]
    fn index_is_x_fastest() {
        assert_eq!(ChunkCoord::new(1, 0, 0).index(3), 1);
        assert_eq!(ChunkCoord::new(0, 1, 0).index(3), 3);
        assert_eq!(ChunkCoord::new(0, 0, 1).index(3), 9);
        assert_eq!(ChunkCoord::new(2, 2, 2).index(3), 26);
    }

    #[test]
    fn from_index_inverts_index() {
        for index in 0..27 {
            assert_eq!(ChunkCoord::from_index(index, 3).index(3), index);
        }
        assert_eq!(ChunkCoord::from_index(5, 3), ChunkCoord::new(2, 1, 0));
    }
}
