//! Mesher configuration.
//!
//! [`MesherConfig`] selects the merge strategy and drives the chunk
//! partitioner. It is plain data and can be loaded from any serde format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};
use crate::mesh::{BinaryGreedyMesher, CulledCubeMesher, NaiveGreedyMesher, VoxelMesher};

/// Quad generation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshStrategy {
    /// Dense per-cell greedy merge.
    Naive,
    /// Bit-packed greedy merge.
    #[default]
    Binary,
    /// One quad per visible face, no merging.
    Culled,
}

impl MeshStrategy {
    /// All strategies.
    pub const ALL: [MeshStrategy; 3] = [MeshStrategy::Naive, MeshStrategy::Binary, MeshStrategy::Culled];

    /// Strategy name as used by `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            MeshStrategy::Naive => "naive",
            MeshStrategy::Binary => "binary",
            MeshStrategy::Culled => "culled",
        }
    }

    /// Build the mesher for this strategy.
    ///
    /// `band_wide_slices` only affects the binary strategy.
    pub fn mesher(self, band_wide_slices: bool) -> Box<dyn VoxelMesher> {
        match self {
            MeshStrategy::Naive => Box::new(NaiveGreedyMesher),
            MeshStrategy::Binary => Box::new(BinaryGreedyMesher { band_wide_slices }),
            MeshStrategy::Culled => Box::new(CulledCubeMesher),
        }
    }
}

impl fmt::Display for MeshStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeshStrategy {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        MeshStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeshError::UnknownStrategy(s.to_string()))
    }
}

/// Configuration for meshing a volume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MesherConfig {
    /// Side length of each chunk in voxels. Must be in `1..=width`.
    pub chunk_size: usize,

    /// Quad generation strategy.
    pub strategy: MeshStrategy,

    /// Mesh chunks on the rayon thread pool.
    pub parallel: bool,

    /// Let the binary strategy process chunks wider than 32 in 32-row bands
    /// instead of rejecting them.
    pub band_wide_slices: bool,
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            chunk_size: 32,
            strategy: MeshStrategy::Binary,
            parallel: true,
            band_wide_slices: false,
        }
    }
}

impl MesherConfig {
    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the strategy.
    pub fn with_strategy(mut self, strategy: MeshStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable parallel chunk meshing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable or disable banding of wide binary slices.
    pub fn with_band_wide_slices(mut self, band_wide_slices: bool) -> Self {
        self.band_wide_slices = band_wide_slices;
        self
    }

    /// Check the configuration against a volume width.
    ///
    /// # Errors
    /// Returns [`MeshError::InvalidChunkSize`] unless `1 <= chunk_size <= width`.
    pub fn validate(&self, width: usize) -> Result<()> {
        if self.chunk_size == 0 || self.chunk_size > width {
            return Err(MeshError::InvalidChunkSize {
                chunk_size: self.chunk_size,
                width,
            });
        }
        Ok(())
    }

    /// Mesher for the configured strategy.
    pub fn mesher(&self) -> Box<dyn VoxelMesher> {
        self.strategy.mesher(self.band_wide_slices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MesherConfig::default();
        assert_eq!(config.chunk_size, 32);
        assert_eq!(config.strategy, MeshStrategy::Binary);
        assert!(config.parallel);
        assert!(!config.band_wide_slices);
    }

    #[test]
    fn builder_methods() {
        let config = MesherConfig::default()
            .with_chunk_size(16)
            .with_strategy(MeshStrategy::Naive)
            .with_parallel(false)
            .with_band_wide_slices(true);
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.strategy, MeshStrategy::Naive);
        assert!(!config.parallel);
        assert!(config.band_wide_slices);
    }

    #[test]
    fn chunk_size_bounds() {
        let config = MesherConfig::default().with_chunk_size(8);
        assert!(config.validate(8).is_ok());
        assert!(config.validate(64).is_ok());
        assert_eq!(
            config.validate(4),
            Err(MeshError::InvalidChunkSize { chunk_size: 8, width: 4 })
        );
        assert!(MesherConfig::default().with_chunk_size(0).validate(4).is_err());
    }

    #[test]
    fn strategy_names() {
        assert_eq!("naive".parse::<MeshStrategy>().unwrap(), MeshStrategy::Naive);
        assert_eq!("Binary".parse::<MeshStrategy>().unwrap(), MeshStrategy::Binary);
        assert_eq!(MeshStrategy::Culled.to_string(), "culled");
        assert_eq!(
            "marching".parse::<MeshStrategy>(),
            Err(MeshError::UnknownStrategy("marching".to_string()))
        );
    }

    #[test]
    fn mesher_matches_strategy() {
        for strategy in MeshStrategy::ALL {
            assert_eq!(strategy.mesher(false).name(), strategy.as_str());
        }
    }

    #[test]
    fn serde_roundtrip() {
        let config = MesherConfig::default().with_strategy(MeshStrategy::Culled);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"strategy\":\"culled\""));
        let back: MesherConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn serde_fills_missing_fields() {
        let config: MesherConfig = serde_json::from_str(r#"{"chunk_size": 8}"#).unwrap();
        assert_eq!(config.chunk_size, 8);
        assert_eq!(config.strategy, MeshStrategy::Binary);
        assert!(config.parallel);
    }
}
