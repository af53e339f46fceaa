/// Errors raised when validating world or terrain configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("tile size must be a positive finite number, got {0}")]
    InvalidTileSize(f32),

    #[error("chunk side must be at least one tile")]
    EmptyChunk,

    #[error("noise scale must be a positive finite number, got {0}")]
    InvalidNoiseScale(f64),

    #[error("biome thresholds must be finite and ascending (grass {grass} < sand {sand})")]
    UnorderedThresholds { grass: f64, sand: f64 },
}
