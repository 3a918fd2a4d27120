//! Test utilities for the Lumen overlay.
//!
//! With the `mock` feature this crate provides recording stand-ins for the
//! overlay's collaborators:
//!
//! - `MockGraphicsContext` - records every state change and tracks the
//!   resulting state through a real [`ImmediateContext`](lumen_render::ImmediateContext)
//! - `MockFont` - records bind/unbind/render calls, with configurable metrics
//! - `MockRenderer` - records drawn rectangles
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use lumen_render::{GraphicsContext, MatrixMode};
//! use lumen_test_utils::MockGraphicsContext;
//!
//! let mut gfx = MockGraphicsContext::new();
//! gfx.push_matrix().unwrap();
//!
//! assert_eq!(gfx.count_pushes(), 1);
//! assert_eq!(gfx.depth(MatrixMode::ModelView), 2);
//! # }
//! ```
//!
//! # Interior mutability
//!
//! Fonts are shared through `Arc<dyn GlyphFont>` and every font method takes
//! `&self`, so `MockFont` keeps its log in a `parking_lot::Mutex`. The graphics
//! context and renderer are used through `&mut self` and need no locking.

#[cfg(feature = "mock")]
mod mock_font;
#[cfg(feature = "mock")]
mod mock_graphics;
#[cfg(feature = "mock")]
mod mock_renderer;

#[cfg(feature = "mock")]
pub use mock_font::*;
#[cfg(feature = "mock")]
pub use mock_graphics::*;
#[cfg(feature = "mock")]
pub use mock_renderer::*;
