use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AssetError;
use crate::handle::{next_asset_id, AssetHandle, AssetId};
use crate::texture::{self, TextureAsset};

/// Central texture registry. Loads, caches, and provides access to tile images.
pub struct AssetServer {
    base_path: PathBuf,
    textures: HashMap<AssetId, TextureAsset>,
    path_to_texture: HashMap<PathBuf, AssetHandle<TextureAsset>>,
}

impl AssetServer {
    /// Create a new AssetServer rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let base_path = base_path.into();
        info!("AssetServer created with base path: {}", base_path.display());
        Self {
            base_path,
            textures: HashMap::new(),
            path_to_texture: HashMap::new(),
        }
    }

    /// Resolve a relative asset path against the base path.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Load an image file (PNG, JPEG, etc.) as a texture.
    /// Subsequent loads of the same path return the cached handle.
    pub fn load_texture(
        &mut self,
        path: &Path,
    ) -> Result<AssetHandle<TextureAsset>, AssetError> {
        let full_path = self.resolve(path);

        if let Some(&handle) = self.path_to_texture.get(&full_path) {
            return Ok(handle);
        }

        if !full_path.exists() {
            return Err(AssetError::NotFound(full_path));
        }

        let tex = texture::load_texture(&full_path)?;
        info!(
            "Loaded texture {} ({}x{})",
            full_path.display(),
            tex.width,
            tex.height
        );
        let handle = self.insert_texture(tex);
        self.path_to_texture.insert(full_path, handle);

        Ok(handle)
    }

    /// Register an already decoded texture.
    pub fn insert_texture(&mut self, texture: TextureAsset) -> AssetHandle<TextureAsset> {
        let id = next_asset_id();
        self.textures.insert(id, texture);
        AssetHandle::new(id)
    }

    /// Get a reference to a loaded texture by its handle.
    pub fn get_texture(&self, handle: AssetHandle<TextureAsset>) -> Option<&TextureAsset> {
        self.textures.get(&handle.id())
    }

    /// The base path this server resolves relative paths against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_texture_returns_not_found() {
        let mut server = AssetServer::new("/nonexistent");
        let result = server.load_texture(Path::new("does_not_exist.png"));
        match result {
            Err(AssetError::NotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/does_not_exist.png"));
            }
            other => panic!("expected NotFound, got: {:?}", other),
        }
        assert!(server.textures.is_empty());
        assert!(server.path_to_texture.is_empty());
    }

    #[test]
    fn resolve_absolute_path() {
        let server = AssetServer::new("/home/user/assets");
        assert_eq!(
            server.resolve(Path::new("/absolute/water.jpg")),
            PathBuf::from("/absolute/water.jpg")
        );
    }

    #[test]
    fn resolve_relative_path() {
        let server = AssetServer::new("/home/user/assets");
        assert_eq!(
            server.resolve(Path::new("img/sand.png")),
            PathBuf::from("/home/user/assets/img/sand.png")
        );
        assert_eq!(server.base_path(), Path::new("/home/user/assets"));
    }

    #[test]
    fn inserted_texture_is_resolvable() {
        let mut server = AssetServer::new(".");
        let handle = server.insert_texture(TextureAsset::solid(1, 1, [9, 9, 9, 255]));
        let tex = server.get_texture(handle).expect("texture registered");
        assert_eq!(tex.pixel(0, 0), [9, 9, 9, 255]);

        let other = AssetServer::new(".");
        assert!(other.get_texture(handle).is_none());
    }
}
