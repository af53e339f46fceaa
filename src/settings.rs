//! Viewer settings with persistence
//!
//! Settings are saved to `~/.config/tilescape/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tilescape_game::CameraConfig;
use tilescape_world::{Biome, TerrainConfig, WorldConfig};
use tracing::{info, warn};

/// All viewer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub video: VideoSettings,
    pub world: WorldConfig,
    pub terrain: TerrainSettings,
    pub controls: CameraConfig,
    pub assets: AssetSettings,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tilescape"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        // Create config directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(path)
    }
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// Frame rate cap
    pub target_fps: u32,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            target_fps: 60,
        }
    }
}

/// Noise settings; the seed is picked per session, not stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    pub noise_scale: f64,
    pub grass_max: f64,
    pub sand_max: f64,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        let defaults = TerrainConfig::default();
        Self {
            noise_scale: defaults.noise_scale,
            grass_max: defaults.grass_max,
            sand_max: defaults.sand_max,
        }
    }
}

impl TerrainSettings {
    pub fn to_config(&self, seed: u32) -> TerrainConfig {
        TerrainConfig {
            seed,
            noise_scale: self.noise_scale,
            grass_max: self.grass_max,
            sand_max: self.sand_max,
        }
    }
}

/// Where tile images live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory relative image paths are resolved against
    pub base_path: PathBuf,
    pub grass: PathBuf,
    pub sand: PathBuf,
    pub water: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("img"),
            grass: PathBuf::from("grass.jpg"),
            sand: PathBuf::from("sand.png"),
            water: PathBuf::from("water.jpg"),
        }
    }
}

impl AssetSettings {
    pub fn image_path(&self, biome: Biome) -> &Path {
        match biome {
            Biome::Grass => &self.grass,
            Biome::Sand => &self.sand,
            Biome::Water => &self.water,
        }
    }
}
