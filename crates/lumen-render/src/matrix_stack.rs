use glam::Mat4;

use crate::{MatrixMode, RenderError, RenderResult};

/// A bounded stack of transforms whose top is the current matrix.
///
/// The stack is never empty: the bottom entry is the base matrix and cannot
/// be popped.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    mode: MatrixMode,
    entries: Vec<Mat4>,
    limit: usize,
}

impl MatrixStack {
    /// A stack holding at most `limit` matrices (including the base).
    pub fn new(mode: MatrixMode, limit: usize) -> Self {
        let limit = limit.max(1);
        let mut entries = Vec::with_capacity(limit);
        entries.push(Mat4::IDENTITY);
        Self { mode, entries, limit }
    }

    pub fn top(&self) -> Mat4 {
        self.entries[self.entries.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Mat4 {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// Number of matrices on the stack, base included.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn push(&mut self) -> RenderResult<()> {
        if self.entries.len() >= self.limit {
            return Err(RenderError::StackOverflow {
                mode: self.mode,
                limit: self.limit,
            });
        }
        let top = self.top();
        self.entries.push(top);
        Ok(())
    }

    pub fn pop(&mut self) -> RenderResult<()> {
        if self.entries.len() <= 1 {
            return Err(RenderError::StackUnderflow { mode: self.mode });
        }
        self.entries.pop();
        Ok(())
    }

    pub fn load(&mut self, matrix: Mat4) {
        *self.top_mut() = matrix;
    }

    /// Post-multiply the top, so `matrix` applies before the existing transform.
    pub fn multiply(&mut self, matrix: Mat4) {
        let top = self.top_mut();
        *top *= matrix;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_push_duplicates_top() {
        let mut stack = MatrixStack::new(MatrixMode::ModelView, 4);
        stack.load(Mat4::from_translation(Vec3::X));
        stack.push().unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top(), Mat4::from_translation(Vec3::X));
    }

    #[test]
    fn test_pop_restores_previous() {
        let mut stack = MatrixStack::new(MatrixMode::ModelView, 4);
        stack.push().unwrap();
        stack.multiply(Mat4::from_translation(Vec3::Y));
        stack.pop().unwrap();
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn test_base_cannot_be_popped() {
        let mut stack = MatrixStack::new(MatrixMode::Projection, 2);
        assert_eq!(
            stack.pop(),
            Err(RenderError::StackUnderflow {
                mode: MatrixMode::Projection
            })
        );
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_limit_enforced() {
        let mut stack = MatrixStack::new(MatrixMode::Projection, 2);
        stack.push().unwrap();
        assert_eq!(
            stack.push(),
            Err(RenderError::StackOverflow {
                mode: MatrixMode::Projection,
                limit: 2
            })
        );
    }

    #[test]
    fn test_multiply_composes_in_order() {
        let mut stack = MatrixStack::new(MatrixMode::ModelView, 2);
        stack.multiply(Mat4::from_scale(Vec3::splat(2.0)));
        stack.multiply(Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)));
        // translation is applied first, then the scale
        let p = stack.top().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(2.0, 0.0, 0.0));
    }
}
