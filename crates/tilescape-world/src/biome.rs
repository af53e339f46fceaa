//! Biomes and how tiles of each biome are drawn

use serde::{Deserialize, Serialize};
use tilescape_assets::{AssetHandle, TextureAsset};
use tilescape_core::Color;

/// Discrete terrain category of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Grass,
    Sand,
    Water,
}

impl Biome {
    pub const ALL: [Biome; 3] = [Biome::Grass, Biome::Sand, Biome::Water];

    pub fn name(&self) -> &'static str {
        match self {
            Biome::Grass => "grass",
            Biome::Sand => "sand",
            Biome::Water => "water",
        }
    }
}

/// How a tile is drawn, decided once when the tile is classified
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderStyle {
    /// Draw an image; `fallback` is filled if the texture cannot be resolved
    Textured {
        texture: AssetHandle<TextureAsset>,
        fallback: Color,
    },
    /// Flat fill
    Color(Color),
}

impl RenderStyle {
    /// The flat color used when no image is drawn
    pub fn fill_color(&self) -> Color {
        match self {
            RenderStyle::Textured { fallback, .. } => *fallback,
            RenderStyle::Color(color) => *color,
        }
    }

    pub fn texture(&self) -> Option<AssetHandle<TextureAsset>> {
        match self {
            RenderStyle::Textured { texture, .. } => Some(*texture),
            RenderStyle::Color(_) => None,
        }
    }
}

/// Visuals for a single biome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub color: Color,
    pub texture: Option<AssetHandle<TextureAsset>>,
}

impl PaletteEntry {
    pub fn color(color: Color) -> Self {
        Self {
            color,
            texture: None,
        }
    }

    pub fn style(&self) -> RenderStyle {
        match self.texture {
            Some(texture) => RenderStyle::Textured {
                texture,
                fallback: self.color,
            },
            None => RenderStyle::Color(self.color),
        }
    }
}

/// Per-biome visuals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomePalette {
    pub grass: PaletteEntry,
    pub sand: PaletteEntry,
    pub water: PaletteEntry,
}

impl Default for BiomePalette {
    fn default() -> Self {
        Self {
            grass: PaletteEntry::color(Color::from_rgb8(60, 255, 50)),
            sand: PaletteEntry::color(Color::from_rgb8(255, 255, 0)),
            water: PaletteEntry::color(Color::from_rgb8(50, 70, 255)),
        }
    }
}

impl BiomePalette {
    pub fn entry(&self, biome: Biome) -> &PaletteEntry {
        match biome {
            Biome::Grass => &self.grass,
            Biome::Sand => &self.sand,
            Biome::Water => &self.water,
        }
    }

    pub fn entry_mut(&mut self, biome: Biome) -> &mut PaletteEntry {
        match biome {
            Biome::Grass => &mut self.grass,
            Biome::Sand => &mut self.sand,
            Biome::Water => &mut self.water,
        }
    }

    /// Attach a texture to a biome, keeping its color as the fallback
    pub fn set_texture(&mut self, biome: Biome, texture: AssetHandle<TextureAsset>) {
        self.entry_mut(biome).texture = Some(texture);
    }

    pub fn style(&self, biome: Biome) -> RenderStyle {
        self.entry(biome).style()
    }
}
