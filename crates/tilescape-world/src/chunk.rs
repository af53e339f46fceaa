//! Chunks: fixed-size square blocks of classified tiles
//!
//! A chunk is the unit of lazy generation. Its tiles are classified in one
//! pass when it is created and never change afterwards.

use glam::{DVec2, Vec2};
use tilescape_core::{PixelRect, Viewport};

use crate::biome::{Biome, RenderStyle};
use crate::terrain::BiomeClassifier;

/// Grid coordinate for a chunk, counted in whole chunks.
///
/// The tile-space origin is always `coord * chunk_side`, so chunk origins
/// are grid-aligned by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
}

impl ChunkCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The chunk containing a tile
    pub fn from_tile(grid_x: i32, grid_y: i32, chunk_side: u32) -> Self {
        let side = chunk_side as i32;
        Self {
            x: grid_x.div_euclid(side),
            y: grid_y.div_euclid(side),
        }
    }

    /// The chunk containing a world pixel position
    pub fn from_world_pos(pos: DVec2, tile_size: f32, chunk_side: u32) -> Self {
        let chunk_pixels = tile_size as f64 * chunk_side as f64;
        Self {
            x: (pos.x / chunk_pixels).floor() as i32,
            y: (pos.y / chunk_pixels).floor() as i32,
        }
    }

    /// Tile-space origin (min corner) of this chunk
    pub fn origin(&self, chunk_side: u32) -> (i32, i32) {
        let side = chunk_side as i32;
        (self.x * side, self.y * side)
    }

    /// The four axis-aligned neighbors: +x, +y, -x, -y
    pub fn neighbors(&self) -> [ChunkCoord; 4] {
        [
            ChunkCoord::new(self.x + 1, self.y),
            ChunkCoord::new(self.x, self.y + 1),
            ChunkCoord::new(self.x - 1, self.y),
            ChunkCoord::new(self.x, self.y - 1),
        ]
    }

    /// World pixel position of the chunk's top-left corner
    pub fn world_origin(&self, tile_size: f32, chunk_side: u32) -> DVec2 {
        let (origin_x, origin_y) = self.origin(chunk_side);
        DVec2::new(origin_x as f64, origin_y as f64) * tile_size as f64
    }

    /// Bounding box of the chunk in screen pixels for a camera offset.
    /// The camera is subtracted in world space before narrowing to `f32`.
    pub fn screen_rect(&self, camera: DVec2, tile_size: f32, chunk_side: u32) -> PixelRect {
        let pos = (self.world_origin(tile_size, chunk_side) - camera).as_vec2();
        let extent = chunk_side as f32 * tile_size;
        PixelRect::new(pos.x, pos.y, extent, extent)
    }

    /// Whether a chunk at this coordinate would overlap the viewport.
    ///
    /// Only the bounding box is used, so this works for chunks that have not
    /// been generated yet.
    pub fn is_visible(
        &self,
        camera: DVec2,
        viewport: Viewport,
        tile_size: f32,
        chunk_side: u32,
    ) -> bool {
        self.screen_rect(camera, tile_size, chunk_side)
            .intersects(&viewport.rect())
    }
}

/// A single classified grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub grid_x: i32,
    pub grid_y: i32,
    pub biome: Biome,
    pub style: RenderStyle,
}

impl Tile {
    /// World pixel position of the tile's top-left corner
    pub fn world_pos(&self, tile_size: f32) -> DVec2 {
        DVec2::new(self.grid_x as f64, self.grid_y as f64) * tile_size as f64
    }

    /// Screen position of the tile's top-left corner for a camera offset
    pub fn screen_pos(&self, camera: DVec2, tile_size: f32) -> Vec2 {
        (self.world_pos(tile_size) - camera).as_vec2()
    }

    /// The `tile_size` square the tile covers on screen
    pub fn screen_rect(&self, camera: DVec2, tile_size: f32) -> PixelRect {
        let pos = self.screen_pos(camera, tile_size);
        PixelRect::new(pos.x, pos.y, tile_size, tile_size)
    }

    pub fn is_visible(&self, camera: DVec2, viewport: Viewport, tile_size: f32) -> bool {
        self.screen_rect(camera, tile_size)
            .intersects(&viewport.rect())
    }
}

/// A fully generated square block of tiles
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Grid coordinate of this chunk
    pub coord: ChunkCoord,
    side: u32,
    /// Row-major tiles, `side * side` of them
    tiles: Vec<Tile>,
}

impl Chunk {
    /// Classify every tile in `[origin_x, origin_x + side) x [origin_y, origin_y + side)`
    pub fn generate(coord: ChunkCoord, side: u32, classifier: &BiomeClassifier) -> Self {
        let (origin_x, origin_y) = coord.origin(side);
        let mut tiles = Vec::with_capacity((side * side) as usize);

        for local_y in 0..side as i32 {
            for local_x in 0..side as i32 {
                let grid_x = origin_x + local_x;
                let grid_y = origin_y + local_y;
                let (biome, style) = classifier.classify(grid_x, grid_y);
                tiles.push(Tile {
                    grid_x,
                    grid_y,
                    biome,
                    style,
                });
            }
        }

        Self { coord, side, tiles }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn origin(&self) -> (i32, i32) {
        self.coord.origin(self.side)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a local position inside the chunk
    pub fn tile(&self, local_x: u32, local_y: u32) -> Option<&Tile> {
        if local_x >= self.side || local_y >= self.side {
            return None;
        }
        self.tiles.get((local_y * self.side + local_x) as usize)
    }

    /// Tile at an absolute grid position, if this chunk covers it
    pub fn tile_at(&self, grid_x: i32, grid_y: i32) -> Option<&Tile> {
        let (origin_x, origin_y) = self.origin();
        let local_x = u32::try_from(grid_x - origin_x).ok()?;
        let local_y = u32::try_from(grid_y - origin_y).ok()?;
        self.tile(local_x, local_y)
    }

    pub fn is_visible(&self, camera: DVec2, viewport: Viewport, tile_size: f32) -> bool {
        self.coord
            .is_visible(camera, viewport, tile_size, self.side)
    }

    /// Tiles that overlap the viewport. Calling again restarts the scan.
    pub fn visible_tiles(
        &self,
        camera: DVec2,
        viewport: Viewport,
        tile_size: f32,
    ) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles
            .iter()
            .filter(move |tile| tile.is_visible(camera, viewport, tile_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomePalette;
    use crate::config::TerrainConfig;

    fn classifier() -> BiomeClassifier {
        BiomeClassifier::new(TerrainConfig::default(), BiomePalette::default())
    }

    #[test]
    fn test_chunk_coord_from_tile() {
        assert_eq!(ChunkCoord::from_tile(0, 0, 20), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_tile(19, 20, 20), ChunkCoord::new(0, 1));
        assert_eq!(ChunkCoord::from_tile(-1, -20, 20), ChunkCoord::new(-1, -1));
        assert_eq!(ChunkCoord::from_tile(-21, 0, 20), ChunkCoord::new(-2, 0));
    }

    #[test]
    fn test_chunk_coord_from_world_pos() {
        assert_eq!(
            ChunkCoord::from_world_pos(DVec2::new(0.0, 0.0), 90.0, 20),
            ChunkCoord::new(0, 0)
        );
        assert_eq!(
            ChunkCoord::from_world_pos(DVec2::new(1801.0, 3700.0), 90.0, 20),
            ChunkCoord::new(1, 2)
        );
        assert_eq!(
            ChunkCoord::from_world_pos(DVec2::new(-1.0, -1.0), 90.0, 20),
            ChunkCoord::new(-1, -1)
        );
    }

    #[test]
    fn test_generate_fills_chunk() {
        let chunk = Chunk::generate(ChunkCoord::new(0, 0), 20, &classifier());
        assert_eq!(chunk.tiles().len(), 400);
        assert_eq!(chunk.origin(), (0, 0));

        let first = chunk.tile(0, 0).unwrap();
        assert_eq!((first.grid_x, first.grid_y), (0, 0));
        let last = chunk.tile(19, 19).unwrap();
        assert_eq!((last.grid_x, last.grid_y), (19, 19));
        assert!(chunk.tile(20, 0).is_none());
    }

    #[test]
    fn test_adjacent_chunks_are_contiguous() {
        let classifier = classifier();
        let a = Chunk::generate(ChunkCoord::new(0, 0), 20, &classifier);
        let b = Chunk::generate(ChunkCoord::new(1, 0), 20, &classifier);

        let max_a = a.tiles().iter().map(|t| t.grid_x).max().unwrap();
        let min_b = b.tiles().iter().map(|t| t.grid_x).min().unwrap();
        assert_eq!(max_a, 19);
        assert_eq!(min_b, 20);
        assert_eq!(b.origin(), (20, 0));

        // Same rows, no shared cells
        for tile in a.tiles() {
            assert!(b.tile_at(tile.grid_x, tile.grid_y).is_none());
        }
    }

    #[test]
    fn test_tiles_match_direct_classification() {
        let classifier = classifier();
        let coord = ChunkCoord::new(-3, 2);
        let chunk = Chunk::generate(coord, 16, &classifier);
        for tile in chunk.tiles() {
            let (biome, style) = classifier.classify(tile.grid_x, tile.grid_y);
            assert_eq!(tile.biome, biome);
            assert_eq!(tile.style, style);
            assert_eq!(ChunkCoord::from_tile(tile.grid_x, tile.grid_y, 16), coord);
        }
    }

    #[test]
    fn test_tile_at_negative_chunk() {
        let chunk = Chunk::generate(ChunkCoord::new(-1, -1), 4, &classifier());
        assert_eq!(chunk.origin(), (-4, -4));
        let tile = chunk.tile_at(-1, -4).unwrap();
        assert_eq!((tile.grid_x, tile.grid_y), (-1, -4));
        assert!(chunk.tile_at(0, -4).is_none());
        assert!(chunk.tile_at(-5, -4).is_none());
    }

    #[test]
    fn test_chunk_visibility_is_inclusive() {
        let viewport = Viewport::new(900.0, 900.0);
        let origin = ChunkCoord::new(0, 0);
        assert!(origin.is_visible(DVec2::ZERO, viewport, 90.0, 20));

        // Left neighbor's right edge touches the viewport's left edge
        assert!(ChunkCoord::new(-1, 0).is_visible(DVec2::ZERO, viewport, 90.0, 20));
        // Right neighbor starts 1800px out, past a 900px viewport
        assert!(!ChunkCoord::new(1, 0).is_visible(DVec2::ZERO, viewport, 90.0, 20));
        // After panning 900px right, its left edge touches the viewport's right edge
        assert!(ChunkCoord::new(1, 0).is_visible(DVec2::new(900.0, 0.0), viewport, 90.0, 20));
    }

    #[test]
    fn test_visibility_monotonicity() {
        let viewport = Viewport::new(900.0, 600.0);
        let coord = ChunkCoord::new(0, 0);

        // Any camera keeping the boxes overlapping keeps the chunk visible
        for step in 0..=36 {
            let camera = DVec2::new(-900.0 + step as f64 * 75.0, 0.0);
            assert!(coord.is_visible(camera, viewport, 90.0, 20), "camera {:?}", camera);
        }

        // Past the far edge on either side
        assert!(!coord.is_visible(DVec2::new(1800.5, 0.0), viewport, 90.0, 20));
        assert!(!coord.is_visible(DVec2::new(-900.5, 0.0), viewport, 90.0, 20));
        assert!(!coord.is_visible(DVec2::new(0.0, 1800.5), viewport, 90.0, 20));
        assert!(!coord.is_visible(DVec2::new(0.0, -600.5), viewport, 90.0, 20));
    }

    #[test]
    fn test_visible_tiles() {
        let chunk = Chunk::generate(ChunkCoord::new(0, 0), 20, &classifier());
        let viewport = Viewport::new(900.0, 900.0);

        // 10 full tiles plus the touching 11th column and row
        let count = chunk.visible_tiles(DVec2::ZERO, viewport, 90.0).count();
        assert_eq!(count, 11 * 11);

        // Restartable
        assert_eq!(chunk.visible_tiles(DVec2::ZERO, viewport, 90.0).count(), count);

        // Camera offset by half a tile: columns 0..=10 still overlap
        let shifted = chunk
            .visible_tiles(DVec2::new(45.0, 0.0), viewport, 90.0)
            .filter(|t| t.grid_y == 0)
            .count();
        assert_eq!(shifted, 11);

        assert!(chunk.is_visible(DVec2::ZERO, viewport, 90.0));
        assert_eq!(
            chunk
                .visible_tiles(DVec2::new(5000.0, 0.0), viewport, 90.0)
                .count(),
            0
        );
    }

    #[test]
    fn test_screen_positions_stay_exact_far_from_origin() {
        let chunk_side = 20;
        // 2^27 px out, where f32 spacing is 16px
        let coord = ChunkCoord::from_world_pos(DVec2::new(134_217_728.0, 0.0), 90.0, chunk_side);
        assert_eq!(coord, ChunkCoord::new(74565, 0));

        let chunk = Chunk::generate(coord, chunk_side, &classifier());
        let camera = chunk.coord.world_origin(90.0, chunk_side) + DVec2::new(5.0, 0.0);
        let tile = chunk.tile(1, 0).unwrap();
        assert_eq!(tile.screen_pos(camera, 90.0), Vec2::new(85.0, 0.0));

        let camera = camera + DVec2::new(5.0, 0.0);
        assert_eq!(tile.screen_pos(camera, 90.0), Vec2::new(80.0, 0.0));

        // Left neighbor's right edge touches the viewport only when the
        // camera sits exactly on the chunk boundary
        let viewport = Viewport::new(900.0, 900.0);
        let left = ChunkCoord::new(coord.x - 1, 0);
        let boundary = chunk.coord.world_origin(90.0, chunk_side);
        assert!(left.is_visible(boundary, viewport, 90.0, chunk_side));
        assert!(!left.is_visible(boundary + DVec2::new(1.0, 0.0), viewport, 90.0, chunk_side));
    }
}
