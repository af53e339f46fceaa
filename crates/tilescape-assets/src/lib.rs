//! Tilescape Assets - Texture loading and management
//!
//! Decodes biome tile images and hands out typed handles to them. A texture
//! that fails to load is reported as an [`AssetError`] so callers can fall
//! back to flat colors.

mod error;
mod handle;
mod server;
mod texture;

pub use error::AssetError;
pub use handle::{AssetHandle, AssetId};
pub use server::AssetServer;
pub use texture::{load_texture, TextureAsset};
