//! The streamed tile world
//!
//! Chunks are generated on demand as the camera uncovers them and kept for
//! the rest of the session. Growth only happens next to chunks that are
//! already on screen, and only for neighbors that would be on screen too.

use std::collections::HashMap;

use glam::{DVec2, Vec2};
use tilescape_core::Viewport;
use tracing::debug;

use crate::chunk::{Chunk, ChunkCoord, Tile};
use crate::config::WorldConfig;
use crate::terrain::BiomeClassifier;

/// Generated chunks plus the camera looking at them
pub struct World {
    /// Grid layout, fixed for the world's lifetime
    config: WorldConfig,
    classifier: BiomeClassifier,
    /// Pixel offset of the viewport's top-left corner in world space
    camera: DVec2,
    /// Every chunk generated so far, keyed by coordinate
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Chunks generated during the last update
    newly_generated: Vec<ChunkCoord>,
}

impl World {
    /// Create an empty world
    pub fn new(config: WorldConfig, classifier: BiomeClassifier) -> Self {
        Self {
            config,
            classifier,
            camera: DVec2::ZERO,
            chunks: HashMap::new(),
            newly_generated: Vec::new(),
        }
    }

    /// Create a world with the chunk at the origin already generated
    pub fn with_origin_chunk(config: WorldConfig, classifier: BiomeClassifier) -> Self {
        let mut world = Self::new(config, classifier);
        world.generate_chunk(ChunkCoord::new(0, 0));
        world.newly_generated.clear();
        world
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn classifier(&self) -> &BiomeClassifier {
        &self.classifier
    }

    pub fn camera(&self) -> DVec2 {
        self.camera
    }

    pub fn set_camera(&mut self, camera: DVec2) {
        self.camera = camera;
    }

    pub fn move_camera(&mut self, delta: Vec2) {
        self.camera += delta.as_dvec2();
    }

    /// Chunks generated during the last [`World::update`]
    pub fn newly_generated(&self) -> &[ChunkCoord] {
        &self.newly_generated
    }

    /// Get a generated chunk by coordinate
    pub fn get_chunk(&self, coord: &ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(coord)
    }

    pub fn contains_chunk(&self, coord: &ChunkCoord) -> bool {
        self.chunks.contains_key(coord)
    }

    /// Iterate over all generated chunks
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Number of generated chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Look up a generated tile by absolute grid position
    pub fn tile_at(&self, grid_x: i32, grid_y: i32) -> Option<&Tile> {
        let coord = ChunkCoord::from_tile(grid_x, grid_y, self.config.chunk_side);
        self.chunks.get(&coord)?.tile_at(grid_x, grid_y)
    }

    /// Generate the chunk at `coord` unless it already exists.
    /// Returns whether a chunk was generated.
    pub fn generate_chunk(&mut self, coord: ChunkCoord) -> bool {
        if self.chunks.contains_key(&coord) {
            return false;
        }
        let chunk = Chunk::generate(coord, self.config.chunk_side, &self.classifier);
        self.chunks.insert(coord, chunk);
        self.newly_generated.push(coord);
        true
    }

    /// Whether a chunk at `coord`, generated or not, would be on screen
    pub fn is_coord_visible(&self, coord: ChunkCoord, viewport: Viewport) -> bool {
        coord.is_visible(
            self.camera,
            viewport,
            self.config.tile_size,
            self.config.chunk_side,
        )
    }

    /// Coordinates of generated chunks that overlap the viewport.
    ///
    /// Only the coordinate range under the viewport is probed, so the cost
    /// depends on the screen size rather than how much has been explored.
    pub fn visible_chunks(&self, viewport: Viewport) -> Vec<ChunkCoord> {
        let chunk_pixels = self.config.chunk_pixels() as f64;
        let (width, height) = (viewport.width as f64, viewport.height as f64);
        // One extra chunk on the low side catches neighbors whose far edge
        // exactly touches the viewport.
        let min_x = (self.camera.x / chunk_pixels).floor() as i32 - 1;
        let min_y = (self.camera.y / chunk_pixels).floor() as i32 - 1;
        let max_x = ((self.camera.x + width) / chunk_pixels).floor() as i32;
        let max_y = ((self.camera.y + height) / chunk_pixels).floor() as i32;

        let mut visible = Vec::new();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let coord = ChunkCoord::new(x, y);
                if self.chunks.contains_key(&coord) && self.is_coord_visible(coord, viewport) {
                    visible.push(coord);
                }
            }
        }
        visible
    }

    /// Advance streaming for one frame and return the chunks to draw.
    ///
    /// Every visible chunk checks its four neighbors; a missing neighbor is
    /// generated only if its bounding box would be on screen. Freshly
    /// generated chunks are checked the same way before returning, so the
    /// result already contains everything that appeared this frame and a
    /// stationary camera stops generating after one update.
    ///
    /// If nothing generated is on screen (the camera jumped past the
    /// frontier), the chunk under the viewport center seeds the expansion.
    pub fn update(&mut self, viewport: Viewport) -> Vec<ChunkCoord> {
        self.newly_generated.clear();

        let mut visible = self.visible_chunks(viewport);
        if visible.is_empty() {
            let anchor = self.anchor_coord(viewport);
            debug!("No visible chunks, anchoring at {:?}", anchor);
            self.generate_chunk(anchor);
            visible.push(anchor);
        }

        let mut cursor = 0;
        while cursor < visible.len() {
            let coord = visible[cursor];
            cursor += 1;

            for neighbor in coord.neighbors() {
                if self.chunks.contains_key(&neighbor) {
                    continue;
                }
                if !self.is_coord_visible(neighbor, viewport) {
                    continue;
                }
                self.generate_chunk(neighbor);
                visible.push(neighbor);
            }
        }

        if !self.newly_generated.is_empty() {
            debug!(
                "Generated {} chunks ({} total)",
                self.newly_generated.len(),
                self.chunks.len()
            );
        }

        visible
    }

    /// Chunk under the center of the viewport
    fn anchor_coord(&self, viewport: Viewport) -> ChunkCoord {
        ChunkCoord::from_world_pos(
            self.camera + viewport.center().as_dvec2(),
            self.config.tile_size,
            self.config.chunk_side,
        )
    }
}
