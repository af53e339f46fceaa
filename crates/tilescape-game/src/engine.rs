//! Per-frame streaming loop
//!
//! One call to [`StreamingEngine::frame`] runs a whole frame to completion:
//! move the camera from input, grow the world around the viewport, then draw
//! what is visible. Nothing is carried between frames except the world.

use glam::DVec2;
use tilescape_assets::AssetServer;
use tilescape_core::Viewport;
use tilescape_render::{RenderStats, Surface, TileRenderer};
use tilescape_world::{ChunkCoord, World};
use tracing::debug;

use crate::camera::CameraController;
use crate::input::InputState;

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Camera position after input was applied
    pub camera: DVec2,
    /// Chunks drawn this frame
    pub visible_chunks: usize,
    /// Chunks generated this frame
    pub generated: usize,
    /// Chunks generated over the whole session
    pub total_chunks: usize,
    pub render: RenderStats,
}

/// Owns the world and drives it one frame at a time
pub struct StreamingEngine {
    pub world: World,
    pub camera: CameraController,
    pub renderer: TileRenderer,
}

impl StreamingEngine {
    pub fn new(world: World, camera: CameraController, renderer: TileRenderer) -> Self {
        Self {
            world,
            camera,
            renderer,
        }
    }

    /// Apply input and stream chunks without drawing.
    /// Returns the chunks that are visible after expansion.
    pub fn step(&mut self, input: &InputState, viewport: Viewport) -> Vec<ChunkCoord> {
        let delta = self.camera.frame_delta(input);
        self.world.move_camera(delta);
        self.world.update(viewport)
    }

    /// Run a full frame against `surface`.
    ///
    /// The viewport is read from the surface every time, so a resized window
    /// is picked up on the next frame.
    pub fn frame(
        &mut self,
        input: &InputState,
        surface: &mut impl Surface,
        assets: &AssetServer,
    ) -> FrameStats {
        let viewport = surface.viewport();
        let visible = self.step(input, viewport);
        let render = self.renderer.draw(surface, &self.world, &visible, assets);

        let stats = FrameStats {
            camera: self.world.camera(),
            visible_chunks: visible.len(),
            generated: self.world.newly_generated().len(),
            total_chunks: self.world.chunk_count(),
            render,
        };
        if stats.generated > 0 {
            debug!(
                "Frame at {:?}: {} visible, {} new, {} tiles drawn",
                stats.camera, stats.visible_chunks, stats.generated, stats.render.tiles
            );
        }
        stats
    }
}
