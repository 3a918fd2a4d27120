use lumen_render::GraphicsContext;

use crate::{CodePoint, decode_utf8};

/// A glyph source the overlay prints through.
///
/// Implementations own their glyph textures. The overlay only asks a font to
/// bind itself, draw one code point at a pen position and report metrics.
/// Fonts are shared (`Arc<dyn GlyphFont>`), so every method takes `&self`.
pub trait GlyphFont: Send + Sync {
    /// Make this font's glyph texture current.
    fn bind(&self, gfx: &mut dyn GraphicsContext);

    /// Release the glyph texture.
    fn unbind(&self, gfx: &mut dyn GraphicsContext) {
        gfx.bind_texture(None);
    }

    /// Draw `ch` with its origin at `(x, y)` in the current transform.
    fn render(&self, gfx: &mut dyn GraphicsContext, ch: CodePoint, x: f32, y: f32);

    /// Horizontal pen advance after drawing `ch`.
    fn advance(&self, ch: CodePoint) -> f32;

    /// Line height. A line break moves down by `1 + height()`.
    fn height(&self) -> f32;
}

/// Width of the widest line of `text` when printed with `font`.
///
/// Decodes with [`decode_utf8`], so malformed bytes contribute nothing.
pub fn measure_width(font: &dyn GlyphFont, text: &[u8]) -> f32 {
    let mut widest = 0.0f32;
    let mut line = 0.0f32;
    for ch in decode_utf8(text) {
        if ch.is_newline() {
            widest = widest.max(line);
            line = 0.0;
        } else {
            line += font.advance(ch);
        }
    }
    widest.max(line)
}

/// Total height of `lines` lines of text, including the one unit gap between
/// consecutive lines.
pub fn measure_height(font: &dyn GlyphFont, lines: usize) -> f32 {
    if lines == 0 {
        return 0.0;
    }
    lines as f32 * font.height() + (lines - 1) as f32
}
