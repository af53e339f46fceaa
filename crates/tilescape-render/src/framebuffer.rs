//! CPU framebuffer surface

use tilescape_assets::TextureAsset;
use tilescape_core::{Color, PixelRect, Viewport};

use crate::surface::Surface;

/// A `0x00RRGGBB` pixel buffer
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Reallocate for a new size. Returns whether the size changed.
    /// Contents are undefined until the next clear.
    pub fn resize(&mut self, width: usize, height: usize) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, 0);
        true
    }

    /// Pixel span covered by `rect` after clipping, as `(x0, x1, y0, y1)`
    /// half-open ranges. Edges are floored so adjacent rects tile exactly.
    fn clip(&self, rect: &PixelRect) -> Option<(usize, usize, usize, usize)> {
        let clamp_x = |v: f32| v.floor().clamp(0.0, self.width as f32) as usize;
        let clamp_y = |v: f32| v.floor().clamp(0.0, self.height as f32) as usize;
        let (x0, x1) = (clamp_x(rect.min.x), clamp_x(rect.max.x));
        let (y0, y1) = (clamp_y(rect.min.y), clamp_y(rect.max.y));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0, x1, y0, y1))
    }
}

impl Surface for FrameBuffer {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgb_u32());
    }

    fn fill_rect(&mut self, color: Color, rect: PixelRect) {
        let Some((x0, x1, y0, y1)) = self.clip(&rect) else {
            return;
        };
        let value = color.to_rgb_u32();
        for y in y0..y1 {
            let row = y * self.width;
            self.pixels[row + x0..row + x1].fill(value);
        }
    }

    fn draw_image(&mut self, texture: &TextureAsset, rect: PixelRect) {
        let Some((x0, x1, y0, y1)) = self.clip(&rect) else {
            return;
        };
        let (w, h) = (rect.width(), rect.height());
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        for y in y0..y1 {
            let v = (y as f32 + 0.5 - rect.min.y) / h;
            for x in x0..x1 {
                let u = (x as f32 + 0.5 - rect.min.x) / w;
                let [r, g, b, a] = texture.sample_nearest(u, v);
                let src = Color::from_rgb8(r, g, b);
                let index = y * self.width + x;
                match a {
                    0 => {}
                    255 => self.pixels[index] = src.to_rgb_u32(),
                    _ => {
                        let dst = unpack(self.pixels[index]);
                        self.pixels[index] =
                            Color::lerp(&dst, &src, a as f32 / 255.0).to_rgb_u32();
                    }
                }
            }
        }
    }
}

fn unpack(pixel: u32) -> Color {
    Color::from_rgb8((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
}
