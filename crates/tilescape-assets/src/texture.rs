use std::fs;
use std::path::Path;

use crate::error::AssetError;

/// A decoded RGBA8 texture.
#[derive(Debug, Clone)]
pub struct TextureAsset {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes
    pub data: Vec<u8>,
}

impl TextureAsset {
    /// Build a texture filled with a single RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Get the RGBA value at a pixel. Coordinates are clamped to the edges.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        let i = ((y * self.width + x) * 4) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Nearest-neighbor sample at normalized coordinates in `[0, 1)`.
    ///
    /// No filtering, so scaled-up tiles stay crisp.
    pub fn sample_nearest(&self, u: f32, v: f32) -> [u8; 4] {
        let x = (u.clamp(0.0, 1.0) * self.width as f32) as u32;
        let y = (v.clamp(0.0, 1.0) * self.height as f32) as u32;
        self.pixel(x, y)
    }
}

/// Load an image file and return it as an RGBA8 TextureAsset.
pub fn load_texture(path: &Path) -> Result<TextureAsset, AssetError> {
    let bytes = fs::read(path).map_err(|e| AssetError::Io(path.to_path_buf(), e))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| AssetError::ImageLoadFailed(path.to_path_buf(), e.to_string()))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::EmptyImage(path.to_path_buf()));
    }

    Ok(TextureAsset {
        width,
        height,
        data: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> TextureAsset {
        // 2x2: red, green / blue, white
        TextureAsset {
            width: 2,
            height: 2,
            data: vec![
                255, 0, 0, 255, 0, 255, 0, 255, //
                0, 0, 255, 255, 255, 255, 255, 255,
            ],
        }
    }

    #[test]
    fn test_solid_texture() {
        let tex = TextureAsset::solid(3, 2, [1, 2, 3, 4]);
        assert_eq!(tex.data.len(), 24);
        assert_eq!(tex.pixel(2, 1), [1, 2, 3, 4]);
    }

    #[test]
    fn test_sample_nearest() {
        let tex = checker();
        assert_eq!(tex.sample_nearest(0.0, 0.0), [255, 0, 0, 255]);
        assert_eq!(tex.sample_nearest(0.75, 0.25), [0, 255, 0, 255]);
        assert_eq!(tex.sample_nearest(0.25, 0.75), [0, 0, 255, 255]);
        // u = 1.0 clamps onto the last column
        assert_eq!(tex.sample_nearest(1.0, 1.0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_load_missing_image_is_io_error() {
        let result = load_texture(Path::new("/nonexistent/grass.jpg"));
        match result {
            Err(AssetError::Io(path, err)) => {
                assert_eq!(path, Path::new("/nonexistent/grass.jpg"));
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let result = load_texture(&std::env::temp_dir());
        assert!(matches!(result, Err(AssetError::Io(_, _))));
    }

    #[test]
    fn test_load_garbage_bytes_fails_to_decode() {
        let path = std::env::temp_dir()
            .join(format!("tilescape-garbage-{}.png", std::process::id()));
        fs::write(&path, b"definitely not an image").unwrap();
        let result = load_texture(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AssetError::ImageLoadFailed(_, _))));
    }
}
