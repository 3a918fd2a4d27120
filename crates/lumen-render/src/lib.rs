//! Lumen Render
//!
//! Graphics-side vocabulary for the overlay: the [`GraphicsContext`] trait the
//! overlay drives, a software [`ImmediateContext`] implementing it, plus the
//! [`Rect`], [`Color`], [`BlendMode`] and [`TextureHandle`] types that flow
//! through it.
//!
//! ```
//! use lumen_render::{GraphicsContext, ImmediateContext, MatrixMode, ortho_2d};
//! use glam::Vec3;
//!
//! let mut ctx = ImmediateContext::new();
//! ctx.set_matrix_mode(MatrixMode::Projection);
//! ctx.push_matrix().unwrap();
//! ctx.load_matrix(ortho_2d(0.0, 640.0, 0.0, 480.0));
//! ctx.set_matrix_mode(MatrixMode::ModelView);
//! ctx.translate(Vec3::new(10.0, 10.0, 0.0));
//! ctx.set_matrix_mode(MatrixMode::Projection);
//! ctx.pop_matrix().unwrap();
//! ```

mod blend;
mod color;
mod context;
mod error;
mod immediate;
mod matrix_stack;
mod rect;
mod texture;

pub use blend::BlendMode;
pub use color::Color;
pub use context::{GraphicsContext, MatrixMode, ortho_2d};
pub use error::{RenderError, RenderResult};
pub use immediate::{ImmediateContext, StackLimits};
pub use matrix_stack::MatrixStack;
pub use rect::{Rect, RectKind, RectRenderer};
pub use texture::{TextureHandle, raw_handle};
