//! Terrain classification using Perlin noise

use noise::{NoiseFn, Perlin};

use crate::biome::{Biome, BiomePalette, RenderStyle};
use crate::config::TerrainConfig;

/// A deterministic scalar field over continuous 2D coordinates.
///
/// Samples are expected to fall roughly in `[-1, 1]`. The same input must
/// always produce the same output: chunks are never regenerated, so tiles on
/// either side of a chunk border have to agree.
pub trait NoiseSource {
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> NoiseSource for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Single-octave Perlin noise seeded once per session
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    perlin: Perlin,
    seed: u32,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.perlin.get([x, y])
    }
}

/// Maps grid coordinates to a biome and the style used to draw it
pub struct BiomeClassifier {
    noise: Box<dyn NoiseSource>,
    config: TerrainConfig,
    palette: BiomePalette,
}

impl BiomeClassifier {
    /// Classifier backed by Perlin noise seeded from `config.seed`
    pub fn new(config: TerrainConfig, palette: BiomePalette) -> Self {
        let noise = PerlinNoise::new(config.seed);
        Self::with_noise(noise, config, palette)
    }

    /// Classifier backed by an arbitrary noise source
    pub fn with_noise(
        noise: impl NoiseSource + 'static,
        config: TerrainConfig,
        palette: BiomePalette,
    ) -> Self {
        Self {
            noise: Box::new(noise),
            config,
            palette,
        }
    }

    /// Raw noise sample for a grid cell
    pub fn noise_at(&self, grid_x: i32, grid_y: i32) -> f64 {
        let scale = self.config.noise_scale;
        self.noise
            .sample(grid_x as f64 * scale, grid_y as f64 * scale)
    }

    pub fn biome_at(&self, grid_x: i32, grid_y: i32) -> Biome {
        self.config.biome_for(self.noise_at(grid_x, grid_y))
    }

    /// Biome and render style for a grid cell
    pub fn classify(&self, grid_x: i32, grid_y: i32) -> (Biome, RenderStyle) {
        let biome = self.biome_at(grid_x, grid_y);
        (biome, self.palette.style(biome))
    }
}
