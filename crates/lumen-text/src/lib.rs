//! Lumen Text
//!
//! Text input for the overlay: lenient UTF-8 decoding into [`CodePoint`]s and
//! the [`GlyphFont`] interface fonts implement.
//!
//! - [`Utf8Decoder`] decodes a byte stream one byte at a time and keeps state
//!   between writes.
//! - [`decode_utf8`] decodes a buffer that is already complete.
//!
//! ```
//! use lumen_text::{CodePoint, Utf8Decoder, decode_utf8};
//!
//! let mut decoder = Utf8Decoder::new();
//! let streamed: Vec<CodePoint> = decoder.feed_bytes("Vega ★".as_bytes()).collect();
//! let batched: Vec<CodePoint> = decode_utf8("Vega ★".as_bytes()).collect();
//! assert_eq!(streamed, batched);
//! ```

mod codepoint;
pub mod font;
pub mod utf8;

pub use codepoint::CodePoint;
pub use font::{GlyphFont, measure_height, measure_width};
pub use utf8::{DecodeState, LeadByte, Utf8Chars, Utf8Decoder, classify_lead, decode_utf8, is_continuation};
