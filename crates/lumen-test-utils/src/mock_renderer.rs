//! Recording implementation of [`RectRenderer`].

use lumen_render::{GraphicsContext, Rect, RectRenderer};

/// Renderer that keeps every rectangle it is asked to draw.
#[derive(Debug, Default)]
pub struct MockRenderer {
    drawn: Vec<Rect>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawn(&self) -> &[Rect] {
        &self.drawn
    }

    pub fn count_draws(&self) -> usize {
        self.drawn.len()
    }

    pub fn clear(&mut self) {
        self.drawn.clear();
    }
}

impl RectRenderer for MockRenderer {
    fn draw_rectangle(&mut self, _gfx: &mut dyn GraphicsContext, rect: &Rect) {
        self.drawn.push(rect.clone());
    }
}
