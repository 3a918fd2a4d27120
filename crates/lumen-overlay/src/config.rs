use glam::Vec2;
use lumen_core::geometry::Size;
use lumen_render::BlendMode;

/// Settings applied when an overlay frame begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    /// Offset applied to the model-view origin so glyph texels land on pixel
    /// centers.
    pub pixel_bias: Vec2,
    /// Blending enabled for the whole frame.
    pub blend: BlendMode,
    /// Initial window size; see [`Overlay::set_window_size`](crate::Overlay::set_window_size).
    pub window_size: Size<u32>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            pixel_bias: Vec2::splat(0.125),
            blend: BlendMode::SourceOver,
            window_size: Size::new(800, 600),
        }
    }
}

impl OverlayConfig {
    pub fn pixel_bias(mut self, bias: Vec2) -> Self {
        self.pixel_bias = bias;
        self
    }

    pub fn blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = Size::new(width, height);
        self
    }
}
