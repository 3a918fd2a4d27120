//! Recording implementation of [`GlyphFont`].

use ahash::AHashMap;
use lumen_render::{GraphicsContext, TextureHandle};
use lumen_text::{CodePoint, GlyphFont};
use parking_lot::Mutex;

/// One recorded font call.
#[derive(Debug, Clone, PartialEq)]
pub enum FontCall {
    Bind,
    Unbind,
    Render { ch: CodePoint, x: f32, y: f32 },
}

/// Font with fixed metrics that records what it was asked to do.
///
/// Binding goes through the graphics context with this font's texture handle,
/// so a [`MockGraphicsContext`](crate::MockGraphicsContext) sees the binds too.
pub struct MockFont {
    texture: TextureHandle,
    height: f32,
    default_advance: f32,
    advances: AHashMap<CodePoint, f32>,
    calls: Mutex<Vec<FontCall>>,
}

impl MockFont {
    /// A font on texture `texture` where every glyph advances by `advance`.
    ///
    /// # Panics
    ///
    /// Panics if `texture` is `0`, which means "no texture".
    pub fn new(texture: u32, advance: f32, height: f32) -> Self {
        Self {
            texture: TextureHandle::new(texture).expect("mock font texture id must be non-zero"),
            height,
            default_advance: advance,
            advances: AHashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Override the advance of a single glyph.
    pub fn with_advance(mut self, ch: impl Into<CodePoint>, advance: f32) -> Self {
        self.advances.insert(ch.into(), advance);
        self
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    pub fn calls(&self) -> Vec<FontCall> {
        self.calls.lock().clone()
    }

    /// Code points rendered so far, in order.
    pub fn rendered(&self) -> Vec<CodePoint> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                FontCall::Render { ch, .. } => Some(*ch),
                _ => None,
            })
            .collect()
    }

    /// Rendered code points as a string, with non-scalar values skipped.
    pub fn rendered_text(&self) -> String {
        self.rendered().into_iter().filter_map(CodePoint::to_char).collect()
    }

    pub fn count_binds(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, FontCall::Bind))
            .count()
    }

    pub fn count_unbinds(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, FontCall::Unbind))
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl GlyphFont for MockFont {
    fn bind(&self, gfx: &mut dyn GraphicsContext) {
        self.calls.lock().push(FontCall::Bind);
        gfx.bind_texture(Some(self.texture));
    }

    fn unbind(&self, gfx: &mut dyn GraphicsContext) {
        self.calls.lock().push(FontCall::Unbind);
        gfx.bind_texture(None);
    }

    fn render(&self, _gfx: &mut dyn GraphicsContext, ch: CodePoint, x: f32, y: f32) {
        self.calls.lock().push(FontCall::Render { ch, x, y });
    }

    fn advance(&self, ch: CodePoint) -> f32 {
        self.advances.get(&ch).copied().unwrap_or(self.default_advance)
    }

    fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphicsCall, MockGraphicsContext};

    #[test]
    fn test_bind_goes_through_context() {
        let font = MockFont::new(5, 8.0, 12.0);
        let mut gfx = MockGraphicsContext::new();
        font.bind(&mut gfx);
        font.unbind(&mut gfx);

        assert_eq!(font.calls(), vec![FontCall::Bind, FontCall::Unbind]);
        assert_eq!(
            gfx.calls(),
            &[
                GraphicsCall::BindTexture(TextureHandle::new(5)),
                GraphicsCall::BindTexture(None),
            ]
        );
    }

    #[test]
    fn test_advance_override() {
        let font = MockFont::new(1, 8.0, 12.0).with_advance('W', 14.0);
        assert_eq!(font.advance(CodePoint::from('W')), 14.0);
        assert_eq!(font.advance(CodePoint::from('i')), 8.0);
    }
}
