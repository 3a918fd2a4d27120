//! HUD Demo - Text Blocks and Panels
//!
//! Draws a small heads-up display into a software graphics context and logs
//! every glyph at its pen position and every panel it asks for:
//! - Opening and closing an overlay frame
//! - Panels drawn through a rectangle renderer
//! - Multi-line text blocks written with `write!`
//! - Malformed UTF-8 being skipped
//!
//! Run with `RUST_LOG=hud=info` to see the output.

use std::io::Write;
use std::sync::Arc;

use lumen_core::logging;
use lumen_core::math::Vec2;
use lumen_overlay::Overlay;
use lumen_render::{Color, GraphicsContext, ImmediateContext, Rect, RectRenderer, TextureHandle};
use lumen_text::{CodePoint, GlyphFont};

/// Fixed-width font that reports each glyph instead of drawing it.
struct MonospaceFont {
    texture: Option<TextureHandle>,
    cell: Vec2,
}

impl GlyphFont for MonospaceFont {
    fn bind(&self, gfx: &mut dyn GraphicsContext) {
        gfx.bind_texture(self.texture);
    }

    fn render(&self, _gfx: &mut dyn GraphicsContext, ch: CodePoint, x: f32, y: f32) {
        tracing::info!(target: "hud", %ch, x, y, "glyph");
    }

    fn advance(&self, ch: CodePoint) -> f32 {
        // combining marks take no room
        match ch.value() {
            0x0300..=0x036F => 0.0,
            _ => self.cell.x,
        }
    }

    fn height(&self) -> f32 {
        self.cell.y
    }
}

/// Renderer that logs rectangles instead of drawing them.
#[derive(Default)]
struct PanelRenderer {
    count: usize,
}

impl RectRenderer for PanelRenderer {
    fn draw_rectangle(&mut self, _gfx: &mut dyn GraphicsContext, rect: &Rect) {
        self.count += 1;
        tracing::info!(
            target: "hud",
            origin = ?rect.origin,
            size = ?rect.size,
            textured = rect.texture.is_some(),
            "panel"
        );
    }
}

fn main() {
    logging::init();

    let font = Arc::new(MonospaceFont {
        texture: TextureHandle::new(1),
        cell: Vec2::new(7.0, 12.0),
    });

    let mut overlay = Overlay::new(ImmediateContext::new(), PanelRenderer::default());
    overlay.set_window_size(1280, 720);
    overlay.set_font(Some(font));

    let mut frame = overlay.begin();

    frame.draw_rectangle(&Rect::new(8.0, 640.0, 240.0, 72.0).color(Color::rgba(0.0, 0.0, 0.0, 0.6)));
    frame.draw_rectangle(
        &Rect::new(8.0, 640.0, 240.0, 72.0)
            .border(1.0)
            .color(Color::from_hex(0x6080A0)),
    );

    frame.set_color(Color::WHITE);
    frame.move_by(16.0, 696.0, 0.0);
    frame.begin_text();
    let _ = writeln!(frame, "Target: Betelgeuse (α Ori)");
    let _ = writeln!(frame, "Distance: {:.0} ly", 548.0);
    let _ = write!(frame, "Magnitude: {:+.2}", 0.42);
    frame.end_text();

    // the line advances above still apply to this block
    frame.move_by(0.0, -20.0, 0.0);
    frame.set_color(Color::rgb(1.0, 0.4, 0.4));
    frame.begin_text();
    let _ = frame.write_all(b"bad \xff\xfe bytes\n");
    frame.print_str("are skipped");
    frame.end_text();

    let origin = frame.graphics().model_view_point(Vec2::ZERO);
    tracing::info!(target: "hud", ?origin, "last text block origin");

    frame.end();

    tracing::info!(target: "hud", panels = overlay.renderer().count, "frame done");
}
