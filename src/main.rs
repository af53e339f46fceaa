//! Tilescape - An endless procedural tile world viewer
//!
//! This is the main entry point: it reads settings, loads the biome
//! textures, and opens the viewer window.

mod app;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tilescape_assets::AssetServer;
use tilescape_game::{CameraController, StreamingEngine};
use tilescape_render::TileRenderer;
use tilescape_world::{Biome, BiomeClassifier, BiomePalette, World};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::app::TilescapeApp;
use crate::settings::{AssetSettings, GameSettings};

#[derive(Parser, Debug)]
#[command(name = "tilescape")]
#[command(about = "Pan across an endless procedurally generated tile world")]
struct Args {
    /// Noise seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Initial window width
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Initial window height
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Directory containing the biome images
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    write_settings: bool,
}

/// Load each biome's image into the palette; biomes whose image fails keep their flat color
fn build_palette(assets: &mut AssetServer, settings: &AssetSettings) -> BiomePalette {
    let mut palette = BiomePalette::default();
    for biome in Biome::ALL {
        match assets.load_texture(settings.image_path(biome)) {
            Ok(handle) => palette.set_texture(biome, handle),
            Err(e) => warn!("{} tiles will use a flat color: {}", biome.name(), e),
        }
    }
    palette
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    let args = Args::parse();
    info!("Starting Tilescape...");

    let mut settings = GameSettings::load();
    if let Some(width) = args.width {
        settings.video.width = width;
    }
    if let Some(height) = args.height {
        settings.video.height = height;
    }
    if let Some(assets) = args.assets {
        settings.assets.base_path = assets;
    }

    if args.write_settings {
        let path = settings.save()?;
        println!("Settings written to {}", path.display());
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let terrain = settings.terrain.to_config(seed);
    settings.world.validate().context("Invalid world settings")?;
    terrain.validate().context("Invalid terrain settings")?;
    info!("Seed: {}", seed);

    let mut assets = AssetServer::new(&settings.assets.base_path);
    let palette = build_palette(&mut assets, &settings.assets);

    let world = World::with_origin_chunk(
        settings.world.clone(),
        BiomeClassifier::new(terrain, palette),
    );
    let engine = StreamingEngine::new(
        world,
        CameraController::with_config(settings.controls.clone()),
        TileRenderer::default(),
    );

    let app = TilescapeApp::new(
        &format!("Tilescape - seed {}", seed),
        settings.video.width as usize,
        settings.video.height as usize,
        settings.video.target_fps as usize,
        engine,
        assets,
    )?;
    app.run()
}
