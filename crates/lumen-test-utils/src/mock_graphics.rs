//! Recording implementation of [`GraphicsContext`].

use glam::{Mat4, Vec3};
use lumen_render::{
    BlendMode, Color, GraphicsContext, ImmediateContext, MatrixMode, RenderResult, StackLimits,
    TextureHandle,
};

/// One recorded graphics call.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsCall {
    MatrixMode(MatrixMode),
    PushMatrix,
    PopMatrix,
    LoadIdentity,
    LoadMatrix(Mat4),
    Translate(Vec3),
    Blend(Option<BlendMode>),
    BindTexture(Option<TextureHandle>),
    Color(Color),
}

/// Graphics context that records calls and tracks state.
///
/// Failed pushes and pops are recorded too, so tests can assert on what the
/// caller attempted as well as on the resulting state.
///
/// ```rust
/// use lumen_render::{GraphicsContext, TextureHandle};
/// use lumen_test_utils::{GraphicsCall, MockGraphicsContext};
///
/// let mut gfx = MockGraphicsContext::new();
/// gfx.bind_texture(TextureHandle::new(7));
///
/// assert_eq!(gfx.calls(), &[GraphicsCall::BindTexture(TextureHandle::new(7))]);
/// assert_eq!(gfx.state().bound_texture(), TextureHandle::new(7));
/// ```
#[derive(Debug, Default)]
pub struct MockGraphicsContext {
    calls: Vec<GraphicsCall>,
    state: ImmediateContext,
}

impl MockGraphicsContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: StackLimits) -> Self {
        Self {
            calls: Vec::new(),
            state: ImmediateContext::with_limits(limits),
        }
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[GraphicsCall] {
        &self.calls
    }

    /// The state the recorded calls produced.
    pub fn state(&self) -> &ImmediateContext {
        &self.state
    }

    /// Current depth of a matrix stack, base included.
    pub fn depth(&self, mode: MatrixMode) -> usize {
        self.state.stack(mode).depth()
    }

    pub fn count_pushes(&self) -> usize {
        self.count(|call| matches!(call, GraphicsCall::PushMatrix))
    }

    pub fn count_pops(&self) -> usize {
        self.count(|call| matches!(call, GraphicsCall::PopMatrix))
    }

    pub fn count_texture_binds(&self) -> usize {
        self.count(|call| matches!(call, GraphicsCall::BindTexture(Some(_))))
    }

    pub fn count_texture_unbinds(&self) -> usize {
        self.count(|call| matches!(call, GraphicsCall::BindTexture(None)))
    }

    fn count(&self, pred: impl Fn(&GraphicsCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }

    /// Clear recorded calls (useful between test steps). State is kept.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }
}

impl GraphicsContext for MockGraphicsContext {
    fn set_matrix_mode(&mut self, mode: MatrixMode) {
        self.calls.push(GraphicsCall::MatrixMode(mode));
        self.state.set_matrix_mode(mode);
    }

    fn push_matrix(&mut self) -> RenderResult<()> {
        self.calls.push(GraphicsCall::PushMatrix);
        self.state.push_matrix()
    }

    fn pop_matrix(&mut self) -> RenderResult<()> {
        self.calls.push(GraphicsCall::PopMatrix);
        self.state.pop_matrix()
    }

    fn load_identity(&mut self) {
        self.calls.push(GraphicsCall::LoadIdentity);
        self.state.load_identity();
    }

    fn load_matrix(&mut self, matrix: Mat4) {
        self.calls.push(GraphicsCall::LoadMatrix(matrix));
        self.state.load_matrix(matrix);
    }

    fn translate(&mut self, offset: Vec3) {
        self.calls.push(GraphicsCall::Translate(offset));
        self.state.translate(offset);
    }

    fn set_blend_mode(&mut self, mode: Option<BlendMode>) {
        self.calls.push(GraphicsCall::Blend(mode));
        self.state.set_blend_mode(mode);
    }

    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        self.calls.push(GraphicsCall::BindTexture(texture));
        self.state.bind_texture(texture);
    }

    fn set_color(&mut self, color: Color) {
        self.calls.push(GraphicsCall::Color(color));
        self.state.set_color(color);
    }
}
