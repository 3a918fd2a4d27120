use crate::MatrixMode;

/// Errors reported by a [`GraphicsContext`](crate::GraphicsContext).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A push would exceed the stack's depth limit.
    StackOverflow { mode: MatrixMode, limit: usize },

    /// A pop was issued with only the base matrix left.
    StackUnderflow { mode: MatrixMode },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::StackOverflow { mode, limit } => {
                write!(f, "{:?} matrix stack overflow (limit {})", mode, limit)
            }
            RenderError::StackUnderflow { mode } => {
                write!(f, "{:?} matrix stack underflow", mode)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Result type for graphics context operations.
pub type RenderResult<T> = Result<T, RenderError>;
