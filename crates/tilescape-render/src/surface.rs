//! Display surface abstraction

use tilescape_assets::TextureAsset;
use tilescape_core::{Color, PixelRect, Viewport};

/// Something tiles can be drawn onto.
///
/// Rectangles are in screen pixels with the origin at the top-left corner.
/// Implementations clip anything outside their bounds.
pub trait Surface {
    /// Current drawable size. May change between frames.
    fn viewport(&self) -> Viewport;

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, color: Color, rect: PixelRect);

    /// Draw `texture` stretched over `rect`
    fn draw_image(&mut self, texture: &TextureAsset, rect: PixelRect);
}
