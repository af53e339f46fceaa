//! Draws the visible part of the world

use tilescape_assets::AssetServer;
use tilescape_core::Color;
use tilescape_world::{ChunkCoord, RenderStyle, World};

use crate::surface::Surface;

/// Counters for a single rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub chunks: usize,
    pub tiles: usize,
    /// Tiles drawn from a texture
    pub textured: usize,
    /// Tiles drawn as a flat color, including texture fallbacks
    pub flat: usize,
}

/// Draws tiles of visible chunks onto a surface
#[derive(Debug, Clone)]
pub struct TileRenderer {
    /// Color behind the tiles
    pub background: Color,
}

impl Default for TileRenderer {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
        }
    }
}

impl TileRenderer {
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Clear the surface and draw every visible tile of `visible`.
    ///
    /// Each tile covers exactly `tile_size` square pixels at its grid
    /// position minus the camera offset. A textured tile whose texture is
    /// not in `assets` is filled with its fallback color instead.
    pub fn draw(
        &self,
        surface: &mut impl Surface,
        world: &World,
        visible: &[ChunkCoord],
        assets: &AssetServer,
    ) -> RenderStats {
        let viewport = surface.viewport();
        let camera = world.camera();
        let tile_size = world.config().tile_size;
        let mut stats = RenderStats::default();

        surface.clear(self.background);

        for coord in visible {
            let Some(chunk) = world.get_chunk(coord) else {
                continue;
            };
            stats.chunks += 1;

            for tile in chunk.visible_tiles(camera, viewport, tile_size) {
                let rect = tile.screen_rect(camera, tile_size);

                let texture = match tile.style {
                    RenderStyle::Textured { texture, .. } => assets.get_texture(texture),
                    RenderStyle::Color(_) => None,
                };
                match texture {
                    Some(texture) => {
                        surface.draw_image(texture, rect);
                        stats.textured += 1;
                    }
                    None => {
                        surface.fill_rect(tile.style.fill_color(), rect);
                        stats.flat += 1;
                    }
                }
                stats.tiles += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use tilescape_assets::TextureAsset;
    use tilescape_core::{DVec2, PixelRect, Viewport};
    use tilescape_world::{
        Biome, BiomeClassifier, BiomePalette, TerrainConfig, WorldConfig,
    };

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear,
        Fill(Color, PixelRect),
        Image(u32, PixelRect),
    }

    struct RecordingSurface {
        viewport: Viewport,
        calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        fn new(width: f32, height: f32) -> Self {
            Self {
                viewport: Viewport::new(width, height),
                calls: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn clear(&mut self, _color: Color) {
            self.calls.push(DrawCall::Clear);
        }

        fn fill_rect(&mut self, color: Color, rect: PixelRect) {
            self.calls.push(DrawCall::Fill(color, rect));
        }

        fn draw_image(&mut self, texture: &TextureAsset, rect: PixelRect) {
            self.calls.push(DrawCall::Image(texture.width, rect));
        }
    }

    /// Small world where every tile is grass
    fn grass_world(palette: BiomePalette) -> World {
        let config = WorldConfig {
            tile_size: 10.0,
            chunk_side: 4,
        };
        let classifier = BiomeClassifier::with_noise(
            |_x: f64, _y: f64| -1.0,
            TerrainConfig::default(),
            palette,
        );
        World::with_origin_chunk(config, classifier)
    }

    #[test]
    fn test_draws_visible_tiles_at_camera_offset() {
        let world = {
            let mut world = grass_world(BiomePalette::default());
            world.set_camera(DVec2::new(5.0, 0.0));
            world
        };
        let mut surface = RecordingSurface::new(20.0, 20.0);
        let assets = AssetServer::new(".");

        let stats = TileRenderer::default().draw(
            &mut surface,
            &world,
            &[ChunkCoord::new(0, 0)],
            &assets,
        );

        assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
        // Columns 0..=2 (x box [-5, 25] covers the 20px viewport), rows 0..=2
        assert_eq!(stats.tiles, 9);
        assert_eq!(stats.flat, 9);
        assert_eq!(stats.chunks, 1);

        let grass = BiomePalette::default().grass.color;
        assert!(surface
            .calls
            .contains(&DrawCall::Fill(grass, PixelRect::new(-5.0, 0.0, 10.0, 10.0))));
        assert!(surface
            .calls
            .contains(&DrawCall::Fill(grass, PixelRect::new(15.0, 20.0, 10.0, 10.0))));
    }

    #[test]
    fn test_textured_tiles_use_image() {
        let mut assets = AssetServer::new(".");
        let handle = assets.insert_texture(TextureAsset::solid(16, 16, [0, 200, 0, 255]));
        let mut palette = BiomePalette::default();
        palette.set_texture(Biome::Grass, handle);

        let world = grass_world(palette);
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let stats = TileRenderer::default().draw(
            &mut surface,
            &world,
            &[ChunkCoord::new(0, 0)],
            &assets,
        );

        assert_eq!(stats.textured, stats.tiles);
        assert_eq!(stats.flat, 0);
        assert!(surface
            .calls
            .contains(&DrawCall::Image(16, PixelRect::new(0.0, 0.0, 10.0, 10.0))));
    }

    #[test]
    fn test_missing_texture_falls_back_to_color() {
        // Handle from a different server, unknown to the one used for drawing
        let mut other = AssetServer::new(".");
        let handle = other.insert_texture(TextureAsset::solid(1, 1, [0, 0, 0, 255]));
        let mut palette = BiomePalette::default();
        palette.set_texture(Biome::Grass, handle);

        let world = grass_world(palette);
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let stats = TileRenderer::default().draw(
            &mut surface,
            &world,
            &[ChunkCoord::new(0, 0)],
            &AssetServer::new("."),
        );

        assert_eq!(stats.textured, 0);
        assert_eq!(stats.flat, stats.tiles);
        assert!(surface.calls.iter().all(|c| !matches!(c, DrawCall::Image(..))));
    }

    #[test]
    fn test_unknown_chunks_are_skipped() {
        let world = grass_world(BiomePalette::default());
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let stats = TileRenderer::default().draw(
            &mut surface,
            &world,
            &[ChunkCoord::new(7, 7)],
            &AssetServer::new("."),
        );
        assert_eq!(stats, RenderStats::default());
        assert_eq!(surface.calls, vec![DrawCall::Clear]);
    }
}
