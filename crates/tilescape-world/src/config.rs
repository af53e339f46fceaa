//! World and terrain generation configuration

use serde::{Deserialize, Serialize};

use crate::biome::Biome;
use crate::error::ConfigError;

/// Layout of the tile grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Edge length of one tile in pixels
    pub tile_size: f32,
    /// Edge length of one chunk in tiles
    pub chunk_side: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: 90.0,
            chunk_side: 20,
        }
    }
}

impl WorldConfig {
    /// Edge length of one chunk in pixels
    pub fn chunk_pixels(&self) -> f32 {
        self.chunk_side as f32 * self.tile_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        if self.chunk_side == 0 {
            return Err(ConfigError::EmptyChunk);
        }
        Ok(())
    }
}

/// Terrain generation configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Random seed for the noise field
    pub seed: u32,
    /// Noise scale (smaller = larger features)
    pub noise_scale: f64,
    /// Noise values below this are grass
    pub grass_max: f64,
    /// Noise values below this (and not grass) are sand; the rest is water
    pub sand_max: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            noise_scale: 0.01,
            grass_max: 0.25,
            sand_max: 0.40,
        }
    }
}

impl TerrainConfig {
    /// Map a noise sample to a biome. Thresholds are checked in order and
    /// the first match wins.
    pub fn biome_for(&self, value: f64) -> Biome {
        if value < self.grass_max {
            Biome::Grass
        } else if value < self.sand_max {
            Biome::Sand
        } else {
            Biome::Water
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(ConfigError::InvalidNoiseScale(self.noise_scale));
        }
        let ordered = self.grass_max.is_finite()
            && self.sand_max.is_finite()
            && self.grass_max < self.sand_max;
        if !ordered {
            return Err(ConfigError::UnorderedThresholds {
                grass: self.grass_max,
                sand: self.sand_max,
            });
        }
        Ok(())
    }
}
