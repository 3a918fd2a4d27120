//! Pen position and text block bookkeeping.

use glam::Vec2;

/// Layout state for printed text.
///
/// `x` is the horizontal offset within the current line. The vertical line
/// offset mirrors the model-view stack the overlay maintains: each text block
/// pushes a copy of the current offset, a line break moves the entry below the
/// top down and re-copies it, and leaving a block pops. So the block depth is
/// always `lines.len() - 1`, and line advances made inside a block survive only
/// as far as the transform they were applied to.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCursor {
    x: f32,
    lines: Vec<f32>,
}

impl Default for TextCursor {
    fn default() -> Self {
        Self {
            x: 0.0,
            lines: vec![0.0],
        }
    }
}

impl TextCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pen position: line offset in `x`, accumulated line advance in `y`.
    pub fn pen(&self) -> Vec2 {
        Vec2::new(self.x, self.line_y())
    }

    fn line_y(&self) -> f32 {
        self.lines.last().copied().unwrap_or(0.0)
    }

    /// Where the next glyph goes in the current line's transform.
    ///
    /// The vertical advance already lives in that transform, so only the
    /// horizontal offset applies.
    pub fn glyph_origin(&self) -> Vec2 {
        Vec2::new(self.x, 0.0)
    }

    /// Number of open text blocks.
    pub fn depth(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn in_block(&self) -> bool {
        self.depth() > 0
    }

    pub(crate) fn advance(&mut self, dx: f32) {
        self.x += dx;
    }

    pub(crate) fn enter_block(&mut self) {
        self.lines.push(self.line_y());
    }

    /// Close the innermost block. Returns `false` when no block is open, in
    /// which case nothing changes.
    pub(crate) fn leave_block(&mut self) -> bool {
        if !self.in_block() {
            return false;
        }
        self.lines.pop();
        self.x = 0.0;
        true
    }

    /// Start a new line `line_advance` units down. Only valid inside a block.
    pub(crate) fn line_break(&mut self, line_advance: f32) {
        debug_assert!(self.in_block());
        self.lines.pop();
        if let Some(below) = self.lines.last_mut() {
            *below -= line_advance;
            let y = *below;
            self.lines.push(y);
        }
        self.x = 0.0;
    }

    /// Forget accumulated line advances. Block depth and `x` are kept.
    pub(crate) fn clear_line_offsets(&mut self) {
        self.lines.fill(0.0);
    }

    /// Back to the origin. Open blocks stay open.
    pub(crate) fn reset(&mut self) {
        self.x = 0.0;
        self.clear_line_offsets();
    }
}
