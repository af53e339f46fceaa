//! Tilescape World - Procedural tile world with lazy chunk streaming
//!
//! Classifies every grid cell into a biome from Perlin noise and grows the
//! world chunk by chunk as the camera uncovers new ground.

pub mod biome;
pub mod chunk;
pub mod config;
pub mod error;
pub mod terrain;
pub mod world;

pub use biome::{Biome, BiomePalette, PaletteEntry, RenderStyle};
pub use chunk::{Chunk, ChunkCoord, Tile};
pub use config::{TerrainConfig, WorldConfig};
pub use error::ConfigError;
pub use terrain::{BiomeClassifier, NoiseSource, PerlinNoise};
pub use world::World;
