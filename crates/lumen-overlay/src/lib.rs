//! Lumen Overlay
//!
//! Screen-space text and rectangles drawn over a rendered scene: labels, HUD
//! readouts, menus.
//!
//! An [`Overlay`] drives a [`GraphicsContext`](lumen_render::GraphicsContext)
//! and a [`RectRenderer`](lumen_render::RectRenderer) and prints through a
//! shared [`GlyphFont`](lumen_text::GlyphFont). Text reaches it either as
//! complete buffers ([`Overlay::print_str`]) or as a byte stream through
//! [`std::io::Write`], decoded incrementally.
//!
//! Text is laid out in blocks. Inside a block a newline starts a new line one
//! unit plus the font height below; outside a block it is ignored.
//!
//! Nothing here fails a frame: malformed UTF-8 is skipped, printing without a
//! font does nothing and graphics stack errors are logged and ignored.

mod config;
mod cursor;
mod frame;
mod overlay;
mod stream;

pub use config::OverlayConfig;
pub use cursor::TextCursor;
pub use frame::OverlayFrame;
pub use overlay::Overlay;
