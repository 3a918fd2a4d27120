use std::sync::Arc;

use glam::{Vec2, Vec3};
use lumen_core::geometry::Size;
use lumen_core::profiling::profile_function;
use lumen_render::{
    Color, GraphicsContext, MatrixMode, Rect, RectRenderer, RenderResult, ortho_2d,
};
use lumen_text::{CodePoint, GlyphFont, Utf8Decoder, decode_utf8};

use crate::{OverlayConfig, OverlayFrame, TextCursor};

/// What the overlay last left bound on the texture unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextureState {
    Unbound,
    /// The active font's glyph texture.
    Font,
    /// A texture bound by the renderer for a textured rectangle.
    Rectangle,
}

/// Screen-space overlay for HUD text and rectangles.
///
/// The overlay owns its graphics context and renderer and holds a shared
/// reference to the active font. Drawing happens inside a frame opened with
/// [`Overlay::begin`]:
///
/// ```
/// use std::io::Write;
/// use std::sync::Arc;
///
/// use lumen_overlay::Overlay;
/// use lumen_render::{Color, ImmediateContext, Rect};
/// use lumen_test_utils::{MockFont, MockRenderer};
///
/// let font = Arc::new(MockFont::new(1, 8.0, 12.0));
/// let mut overlay = Overlay::new(ImmediateContext::new(), MockRenderer::new());
/// overlay.set_window_size(1024, 768);
/// overlay.set_font(Some(font.clone()));
///
/// {
///     let mut frame = overlay.begin();
///     frame.draw_rectangle(&Rect::new(4.0, 4.0, 200.0, 40.0).color(Color::BLACK));
///     frame.set_color(Color::WHITE);
///     frame.begin_text();
///     write!(frame, "Sirius\nα CMa").unwrap();
///     frame.end_text();
/// }
///
/// assert_eq!(font.rendered_text(), "Siriusα CMa");
/// ```
pub struct Overlay<G: GraphicsContext, R: RectRenderer> {
    gfx: G,
    renderer: R,
    config: OverlayConfig,
    window_size: Size<u32>,
    font: Option<Arc<dyn GlyphFont>>,
    font_changed: bool,
    texture: TextureState,
    cursor: TextCursor,
    decoder: Utf8Decoder,
}

/// Log a failed matrix stack operation. The frame carries on regardless.
fn check_stack(result: RenderResult<()>, op: &'static str) {
    if let Err(err) = result {
        tracing::warn!(op, %err, "overlay matrix stack operation failed");
    }
}

impl<G: GraphicsContext, R: RectRenderer> Overlay<G, R> {
    pub fn new(gfx: G, renderer: R) -> Self {
        Self::with_config(gfx, renderer, OverlayConfig::default())
    }

    pub fn with_config(gfx: G, renderer: R, config: OverlayConfig) -> Self {
        Self {
            gfx,
            renderer,
            window_size: config.window_size,
            config,
            font: None,
            font_changed: false,
            texture: TextureState::Unbound,
            cursor: TextCursor::new(),
            decoder: Utf8Decoder::new(),
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Size of the window the next frame's projection covers.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = Size::new(width, height);
    }

    pub fn window_size(&self) -> Size<u32> {
        self.window_size
    }

    /// Change the active font. Passing the font already active is a no-op, so
    /// it does not force a rebind.
    pub fn set_font(&mut self, font: Option<Arc<dyn GlyphFont>>) {
        let same = match (&self.font, &font) {
            (Some(current), Some(new)) => Arc::ptr_eq(current, new),
            (None, None) => true,
            _ => false,
        };
        if !same {
            self.font = font;
            self.font_changed = true;
        }
    }

    pub fn font(&self) -> Option<&Arc<dyn GlyphFont>> {
        self.font.as_ref()
    }

    pub fn cursor(&self) -> &TextCursor {
        &self.cursor
    }

    pub fn pen(&self) -> Vec2 {
        self.cursor.pen()
    }

    /// Move the pen back to the origin.
    ///
    /// The pen is never reset between frames on its own.
    pub fn reset_pen(&mut self) {
        self.cursor.reset();
    }

    pub fn text_block_depth(&self) -> usize {
        self.cursor.depth()
    }

    /// The byte-stream decoder behind the [`std::io::Write`] impl.
    pub fn decoder(&self) -> &Utf8Decoder {
        &self.decoder
    }

    /// True when the active font's texture is known to be bound.
    pub fn is_font_texture_bound(&self) -> bool {
        self.texture == TextureState::Font
    }

    pub fn graphics(&self) -> &G {
        &self.gfx
    }

    pub fn graphics_mut(&mut self) -> &mut G {
        &mut self.gfx
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_parts(self) -> (G, R) {
        (self.gfx, self.renderer)
    }

    /// Open a frame. The returned guard ends it when dropped.
    ///
    /// Sets up a pixel-sized orthographic projection over the window, an
    /// identity model-view nudged by the configured pixel bias, and enables
    /// blending.
    pub fn begin(&mut self) -> OverlayFrame<'_, G, R> {
        self.begin_frame();
        OverlayFrame::new(self)
    }

    fn begin_frame(&mut self) {
        profile_function!();

        let mut size = self.window_size;
        if size.is_empty() {
            tracing::debug!(?size, "overlay frame on an empty window, clamping to 1x1");
            size = Size::new(size.width.max(1), size.height.max(1));
        }
        let size = size.to_f32();

        self.gfx.set_matrix_mode(MatrixMode::Projection);
        check_stack(self.gfx.push_matrix(), "push projection");
        self.gfx.load_matrix(ortho_2d(0.0, size.width, 0.0, size.height));

        self.gfx.set_matrix_mode(MatrixMode::ModelView);
        check_stack(self.gfx.push_matrix(), "push model-view");
        self.gfx.load_identity();
        self.gfx.translate(self.config.pixel_bias.extend(0.0));

        self.gfx.set_blend_mode(Some(self.config.blend));

        self.texture = TextureState::Unbound;
        // The model-view was reloaded, so earlier line advances no longer
        // apply. The horizontal pen carries over.
        self.cursor.clear_line_offsets();
    }

    pub(crate) fn end_frame(&mut self) {
        profile_function!();

        let open = self.cursor.depth();
        if open > 0 {
            tracing::debug!(open, "overlay frame ended with open text blocks, closing them");
            while self.cursor.leave_block() {
                check_stack(self.gfx.pop_matrix(), "pop text block");
            }
        }

        self.gfx.set_matrix_mode(MatrixMode::Projection);
        check_stack(self.gfx.pop_matrix(), "pop projection");
        self.gfx.set_matrix_mode(MatrixMode::ModelView);
        check_stack(self.gfx.pop_matrix(), "pop model-view");
    }

    /// Open a text block: saves the transform and binds the font, if any.
    pub fn begin_text(&mut self) {
        check_stack(self.gfx.push_matrix(), "push text block");
        self.cursor.enter_block();
        if let Some(font) = self.font.as_deref() {
            font.bind(&mut self.gfx);
            self.texture = TextureState::Font;
            self.font_changed = false;
        }
    }

    /// Close the innermost text block.
    ///
    /// Without an open block the transform and pen are left alone, but the
    /// glyph texture is still released: the active font unbinds itself, or
    /// with no font the texture unit is cleared directly.
    pub fn end_text(&mut self) {
        if self.cursor.leave_block() {
            check_stack(self.gfx.pop_matrix(), "pop text block");
        } else {
            tracing::debug!("end_text called without an open text block");
        }

        match self.font.as_deref() {
            Some(font) => font.unbind(&mut self.gfx),
            None => self.gfx.bind_texture(None),
        }
        self.texture = TextureState::Unbound;
    }

    /// Print one code point at the pen.
    ///
    /// Does nothing without a font. A newline starts a new line, but only
    /// inside a text block; elsewhere it is ignored.
    pub fn print(&mut self, ch: impl Into<CodePoint>) {
        let ch = ch.into();
        let Some(font) = self.font.as_deref() else {
            return;
        };

        if self.texture != TextureState::Font || self.font_changed {
            font.bind(&mut self.gfx);
            self.texture = TextureState::Font;
            self.font_changed = false;
        }

        if ch.is_newline() {
            if self.cursor.in_block() {
                let line_advance = 1.0 + font.height();
                check_stack(self.gfx.pop_matrix(), "pop line");
                self.gfx.translate(Vec3::new(0.0, -line_advance, 0.0));
                self.cursor.line_break(line_advance);
                check_stack(self.gfx.push_matrix(), "push line");
            }
        } else {
            let origin = self.cursor.glyph_origin();
            font.render(&mut self.gfx, ch, origin.x, origin.y);
            self.cursor.advance(font.advance(ch));
        }
    }

    /// Print a complete UTF-8 buffer.
    ///
    /// The buffer is decoded on its own with [`decode_utf8`]; it neither
    /// consumes nor disturbs a partial sequence pending in the stream decoder.
    pub fn print_str(&mut self, text: impl AsRef<[u8]>) {
        profile_function!();
        for ch in decode_utf8(text.as_ref()) {
            self.print(ch);
        }
    }

    /// Push raw bytes through the stream decoder.
    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        profile_function!();
        for &byte in bytes {
            if let Some(ch) = self.decoder.feed(byte) {
                self.print(ch);
            }
        }
    }

    /// Draw a rectangle through the renderer.
    ///
    /// An untextured rectangle must not pick up whatever texture is still
    /// bound, so the texture unit is cleared first when needed.
    pub fn draw_rectangle(&mut self, rect: &Rect) {
        match rect.texture {
            None if self.texture != TextureState::Unbound => {
                self.gfx.bind_texture(None);
                self.texture = TextureState::Unbound;
            }
            None => {}
            Some(_) => self.texture = TextureState::Rectangle,
        }
        self.renderer.draw_rectangle(&mut self.gfx, rect);
    }

    pub fn set_color(&mut self, color: Color) {
        self.gfx.set_color(color);
    }

    pub fn set_color_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.gfx.set_color(Color::rgba(r, g, b, a));
    }

    /// Translate the current transform, e.g. to position the next text block.
    pub fn move_by(&mut self, dx: f32, dy: f32, dz: f32) {
        self.gfx.translate(Vec3::new(dx, dy, dz));
    }
}
