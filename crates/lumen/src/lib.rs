//! Lumen - screen-space overlays for real-time renderers
//!
//! Lumen draws HUD text, labels and simple rectangles on top of a rendered
//! scene. It is split into small crates, re-exported here behind features:
//!
//! - **core**: logging setup, profiling hooks, math (always included)
//! - **render** (`render`): graphics context trait, matrix stacks, colors, rectangles
//! - **text** (`text`): incremental and batch UTF-8 decoding, the glyph font interface
//! - **overlay** (`overlay`): the overlay itself, with text blocks and frames
//!
//! # Quick Start
//!
//! ```
//! use std::io::Write;
//! use std::sync::Arc;
//!
//! use lumen::prelude::*;
//! use lumen_test_utils::{MockFont, MockRenderer};
//!
//! let font = Arc::new(MockFont::new(1, 8.0, 12.0));
//! let mut overlay = Overlay::new(ImmediateContext::new(), MockRenderer::new());
//! overlay.set_window_size(640, 480);
//! overlay.set_font(Some(font.clone()));
//!
//! let mut frame = overlay.begin();
//! frame.move_by(10.0, 460.0, 0.0);
//! frame.begin_text();
//! writeln!(frame, "FOV 45.0°").unwrap();
//! frame.print_str("Sol");
//! frame.end_text();
//! frame.end();
//!
//! assert_eq!(font.rendered_text(), "FOV 45.0°Sol");
//! ```

pub use lumen_core as core;
pub use lumen_core::math;

#[cfg(feature = "render")]
pub use lumen_render as render;

#[cfg(feature = "text")]
pub use lumen_text as text;

#[cfg(feature = "overlay")]
pub use lumen_overlay as overlay;

/// Prelude module for convenient imports
pub mod prelude {
    // Core math types
    pub use lumen_core::math::{Mat4, Vec2, Vec3, Vec4};

    // Render types
    #[cfg(feature = "render")]
    pub use lumen_render::{
        BlendMode, Color, GraphicsContext, ImmediateContext, MatrixMode, Rect, RectRenderer,
        TextureHandle,
    };

    // Text types
    #[cfg(feature = "text")]
    pub use lumen_text::{CodePoint, GlyphFont, Utf8Decoder};

    // Overlay types
    #[cfg(feature = "overlay")]
    pub use lumen_overlay::{Overlay, OverlayConfig, OverlayFrame};
}
