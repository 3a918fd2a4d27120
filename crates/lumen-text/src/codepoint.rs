use std::fmt;

/// A decoded character value, independent of its encoded width.
///
/// The UTF-8 decoders here are lenient, so a `CodePoint` can hold values a
/// Rust `char` cannot: surrogates, overlong forms and the 31-bit range of
/// five and six byte sequences. Fonts decide what to draw for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodePoint(u32);

impl CodePoint {
    pub const NEWLINE: CodePoint = CodePoint('\n' as u32);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// The Unicode scalar value, if this is one.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    pub const fn is_newline(self) -> bool {
        self.0 == Self::NEWLINE.0
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<u8> for CodePoint {
    fn from(b: u8) -> Self {
        Self(b as u32)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "U+{:04X}", self.0),
        }
    }
}
