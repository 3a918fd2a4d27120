//! Math types used across the overlay crates.
//!
//! Everything here is a re-export of [`glam`], so `Vec2`/`Vec3`/`Mat4` are the
//! SIMD-backed types and can be handed straight to a GPU backend.
//!
//! ```
//! use lumen_core::math::{Mat4, Vec3};
//!
//! let nudge = Mat4::from_translation(Vec3::new(0.125, 0.125, 0.0));
//! assert_eq!(nudge.w_axis.x, 0.125);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::*;
