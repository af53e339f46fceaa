//! Window host: presents the framebuffer and feeds key snapshots to the engine

use anyhow::{Context, Result};
use minifb::{Window, WindowOptions};
use tilescape_assets::AssetServer;
use tilescape_game::{InputAction, InputHandler, StreamingEngine};
use tilescape_render::FrameBuffer;
use tracing::{debug, info};

/// Application state
pub struct TilescapeApp {
    window: Window,
    framebuffer: FrameBuffer,
    input: InputHandler,
    engine: StreamingEngine,
    assets: AssetServer,
}

impl TilescapeApp {
    pub fn new(
        title: &str,
        width: usize,
        height: usize,
        target_fps: usize,
        engine: StreamingEngine,
        assets: AssetServer,
    ) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .context("Failed to create window")?;
        window.set_target_fps(target_fps);

        Ok(Self {
            window,
            framebuffer: FrameBuffer::new(width, height),
            input: InputHandler::new(),
            engine,
            assets,
        })
    }

    /// Run frames until the window closes or Escape is pressed
    pub fn run(mut self) -> Result<()> {
        let mut frames: u64 = 0;

        while self.window.is_open() {
            let (width, height) = self.window.get_size();
            if self.framebuffer.resize(width.max(1), height.max(1)) {
                info!("Window resized to {}x{}", width, height);
            }

            self.input.update_from_keys(&self.window.get_keys());
            if self.input.state.is_held(InputAction::Quit) {
                info!("Quit requested");
                break;
            }

            let stats = self
                .engine
                .frame(&self.input.state, &mut self.framebuffer, &self.assets);
            frames += 1;
            if frames % 600 == 0 {
                debug!(
                    "Frame {}: camera {:?}, {} chunks in memory",
                    frames, stats.camera, stats.total_chunks
                );
            }

            self.window
                .update_with_buffer(
                    self.framebuffer.pixels(),
                    self.framebuffer.width(),
                    self.framebuffer.height(),
                )
                .context("Failed to present frame")?;
        }

        info!(
            "Viewer closed after {} frames, {} chunks generated",
            frames,
            self.engine.world.chunk_count()
        );
        Ok(())
    }
}
