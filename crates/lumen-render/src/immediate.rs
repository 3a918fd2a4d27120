//! Software implementation of [`GraphicsContext`].
//!
//! [`ImmediateContext`] keeps the same state a fixed-function pipeline would:
//! one matrix stack per [`MatrixMode`], the blend switch, the bound texture and
//! the current color. A GPU backend reads the resolved state back when it
//! records its draws.

use glam::{Mat4, Vec2, Vec3};

use crate::{BlendMode, Color, GraphicsContext, MatrixMode, MatrixStack, RenderResult, TextureHandle};

/// Depth limits for the two matrix stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackLimits {
    pub projection: usize,
    pub model_view: usize,
}

impl Default for StackLimits {
    fn default() -> Self {
        // The minimums fixed-function drivers guarantee.
        Self {
            projection: 2,
            model_view: 32,
        }
    }
}

impl StackLimits {
    pub fn projection(mut self, depth: usize) -> Self {
        self.projection = depth;
        self
    }

    pub fn model_view(mut self, depth: usize) -> Self {
        self.model_view = depth;
        self
    }
}

/// CPU-side graphics state tracker.
#[derive(Debug, Clone)]
pub struct ImmediateContext {
    mode: MatrixMode,
    projection: MatrixStack,
    model_view: MatrixStack,
    blend: Option<BlendMode>,
    texture: Option<TextureHandle>,
    color: Color,
}

impl ImmediateContext {
    pub fn new() -> Self {
        Self::with_limits(StackLimits::default())
    }

    pub fn with_limits(limits: StackLimits) -> Self {
        Self {
            mode: MatrixMode::ModelView,
            projection: MatrixStack::new(MatrixMode::Projection, limits.projection),
            model_view: MatrixStack::new(MatrixMode::ModelView, limits.model_view),
            blend: None,
            texture: None,
            color: Color::WHITE,
        }
    }

    pub fn matrix_mode(&self) -> MatrixMode {
        self.mode
    }

    pub fn stack(&self, mode: MatrixMode) -> &MatrixStack {
        match mode {
            MatrixMode::Projection => &self.projection,
            MatrixMode::ModelView => &self.model_view,
        }
    }

    fn current_mut(&mut self) -> &mut MatrixStack {
        match self.mode {
            MatrixMode::Projection => &mut self.projection,
            MatrixMode::ModelView => &mut self.model_view,
        }
    }

    pub fn projection(&self) -> Mat4 {
        self.projection.top()
    }

    pub fn model_view(&self) -> Mat4 {
        self.model_view.top()
    }

    /// Projection × model-view, the matrix a vertex shader would receive.
    pub fn transform(&self) -> Mat4 {
        self.projection.top() * self.model_view.top()
    }

    /// Where a point in overlay units currently lands, before projection.
    pub fn model_view_point(&self, point: Vec2) -> Vec2 {
        self.model_view.top().transform_point3(point.extend(0.0)).truncate()
    }

    pub fn blend_mode(&self) -> Option<BlendMode> {
        self.blend
    }

    pub fn bound_texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for ImmediateContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext for ImmediateContext {
    fn set_matrix_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    fn push_matrix(&mut self) -> RenderResult<()> {
        self.current_mut().push()
    }

    fn pop_matrix(&mut self) -> RenderResult<()> {
        self.current_mut().pop()
    }

    fn load_identity(&mut self) {
        self.current_mut().load(Mat4::IDENTITY);
    }

    fn load_matrix(&mut self, matrix: Mat4) {
        self.current_mut().load(matrix);
    }

    fn translate(&mut self, offset: Vec3) {
        self.current_mut().multiply(Mat4::from_translation(offset));
    }

    fn set_blend_mode(&mut self, mode: Option<BlendMode>) {
        self.blend = mode;
    }

    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        self.texture = texture;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderError, ortho_2d};

    #[test]
    fn test_matrix_mode_routes_to_stack() {
        let mut ctx = ImmediateContext::new();
        ctx.set_matrix_mode(MatrixMode::Projection);
        ctx.push_matrix().unwrap();
        ctx.load_matrix(ortho_2d(0.0, 100.0, 0.0, 100.0));

        assert_eq!(ctx.stack(MatrixMode::Projection).depth(), 2);
        assert_eq!(ctx.stack(MatrixMode::ModelView).depth(), 1);
        assert_eq!(ctx.projection(), ortho_2d(0.0, 100.0, 0.0, 100.0));
        assert_eq!(ctx.model_view(), Mat4::IDENTITY);
    }

    #[test]
    fn test_translate_accumulates() {
        let mut ctx = ImmediateContext::new();
        ctx.translate(Vec3::new(5.0, 0.0, 0.0));
        ctx.translate(Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(ctx.model_view_point(Vec2::new(1.0, 1.0)), Vec2::new(6.0, -2.0));
    }

    #[test]
    fn test_projection_limit() {
        let mut ctx = ImmediateContext::with_limits(StackLimits::default().projection(2));
        ctx.set_matrix_mode(MatrixMode::Projection);
        assert!(ctx.push_matrix().is_ok());
        assert!(matches!(ctx.push_matrix(), Err(RenderError::StackOverflow { .. })));
    }

    #[test]
    fn test_texture_and_blend_state() {
        let mut ctx = ImmediateContext::new();
        let tex = TextureHandle::new(9);
        ctx.bind_texture(tex);
        ctx.set_blend_mode(Some(BlendMode::SourceOver));
        ctx.set_color(Color::BLACK);
        assert_eq!(ctx.bound_texture(), tex);
        assert_eq!(ctx.blend_mode(), Some(BlendMode::SourceOver));
        assert_eq!(ctx.color(), Color::BLACK);

        ctx.bind_texture(None);
        assert_eq!(ctx.bound_texture(), None);
    }

    #[test]
    fn test_transform_combines_stacks() {
        let mut ctx = ImmediateContext::new();
        ctx.set_matrix_mode(MatrixMode::Projection);
        ctx.load_matrix(ortho_2d(0.0, 200.0, 0.0, 100.0));
        ctx.set_matrix_mode(MatrixMode::ModelView);
        ctx.translate(Vec3::new(100.0, 50.0, 0.0));

        let clip = ctx.transform().project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-6);
        assert!(clip.y.abs() < 1e-6);
    }
}
