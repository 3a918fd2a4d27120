//! Immediate-mode graphics state the overlay drives.
//!
//! The overlay never talks to a GPU API directly. It issues fixed-function
//! style state changes through [`GraphicsContext`]: two matrix stacks, a blend
//! switch, a single texture binding and a flat color.

use glam::{Mat4, Vec3};

use crate::{BlendMode, Color, RenderResult, TextureHandle};

/// Which matrix stack subsequent matrix operations target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixMode {
    Projection,
    #[default]
    ModelView,
}

/// Graphics state sink for overlay drawing.
///
/// All methods take `&mut self`; the overlay owns its context and uses it from
/// a single rendering thread. The trait is object safe so renderers and fonts
/// can receive it as `&mut dyn GraphicsContext`.
pub trait GraphicsContext {
    /// Select the matrix stack targeted by the following matrix calls.
    fn set_matrix_mode(&mut self, mode: MatrixMode);

    /// Duplicate the top of the current stack.
    fn push_matrix(&mut self) -> RenderResult<()>;

    /// Discard the top of the current stack.
    fn pop_matrix(&mut self) -> RenderResult<()>;

    fn load_identity(&mut self);

    /// Replace the top of the current stack.
    fn load_matrix(&mut self, matrix: Mat4);

    /// Post-multiply the top of the current stack by a translation.
    fn translate(&mut self, offset: Vec3);

    /// Enable blending with `mode`, or disable it with `None`.
    fn set_blend_mode(&mut self, mode: Option<BlendMode>);

    /// Bind a texture for subsequent draws. `None` unbinds.
    fn bind_texture(&mut self, texture: Option<TextureHandle>);

    fn set_color(&mut self, color: Color);
}

impl<G: GraphicsContext + ?Sized> GraphicsContext for &mut G {
    fn set_matrix_mode(&mut self, mode: MatrixMode) {
        (**self).set_matrix_mode(mode)
    }

    fn push_matrix(&mut self) -> RenderResult<()> {
        (**self).push_matrix()
    }

    fn pop_matrix(&mut self) -> RenderResult<()> {
        (**self).pop_matrix()
    }

    fn load_identity(&mut self) {
        (**self).load_identity()
    }

    fn load_matrix(&mut self, matrix: Mat4) {
        (**self).load_matrix(matrix)
    }

    fn translate(&mut self, offset: Vec3) {
        (**self).translate(offset)
    }

    fn set_blend_mode(&mut self, mode: Option<BlendMode>) {
        (**self).set_blend_mode(mode)
    }

    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        (**self).bind_texture(texture)
    }

    fn set_color(&mut self, color: Color) {
        (**self).set_color(color)
    }
}

impl<G: GraphicsContext + ?Sized> GraphicsContext for Box<G> {
    fn set_matrix_mode(&mut self, mode: MatrixMode) {
        (**self).set_matrix_mode(mode)
    }

    fn push_matrix(&mut self) -> RenderResult<()> {
        (**self).push_matrix()
    }

    fn pop_matrix(&mut self) -> RenderResult<()> {
        (**self).pop_matrix()
    }

    fn load_identity(&mut self) {
        (**self).load_identity()
    }

    fn load_matrix(&mut self, matrix: Mat4) {
        (**self).load_matrix(matrix)
    }

    fn translate(&mut self, offset: Vec3) {
        (**self).translate(offset)
    }

    fn set_blend_mode(&mut self, mode: Option<BlendMode>) {
        (**self).set_blend_mode(mode)
    }

    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        (**self).bind_texture(texture)
    }

    fn set_color(&mut self, color: Color) {
        (**self).set_color(color)
    }
}

/// Orthographic projection mapping `left..right` × `bottom..top` to clip
/// space, with depth range `-1..1`.
///
/// Origin at the bottom-left with `y` growing upwards, which is why line
/// breaks move the pen towards negative `y`.
pub fn ortho_2d(left: f32, right: f32, bottom: f32, top: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(left, right, bottom, top, -1.0, 1.0)
}
