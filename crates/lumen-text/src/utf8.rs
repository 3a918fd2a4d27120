//! Lenient UTF-8 decoding.
//!
//! Two decoders live here and they are deliberately separate:
//!
//! - [`Utf8Decoder`] is incremental. It sees one byte at a time with no
//!   look-ahead and keeps partial-sequence state between calls, which is what a
//!   byte-oriented output sink needs.
//! - [`decode_utf8`] works on a buffer known to be complete and can look ahead
//!   within it.
//!
//! They share only [`classify_lead`]. Neither ever reports an error: malformed
//! input is dropped and decoding resynchronizes on the next sequence start.
//! Sequence lengths follow the original UTF-8 design of up to six bytes, and
//! overlong forms are not rejected.

use crate::CodePoint;

/// What a byte means at the start of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadByte {
    /// A complete 7-bit character.
    Ascii,
    /// Head of a `len`-byte sequence (2..=6) carrying `payload` bits.
    Sequence { len: u8, payload: u32 },
    /// A continuation byte or `0xFE`/`0xFF`; cannot start a sequence.
    Invalid,
}

/// Classify a byte by its high bits.
pub const fn classify_lead(byte: u8) -> LeadByte {
    let len: u8 = if byte < 0x80 {
        return LeadByte::Ascii;
    } else if byte & 0xE0 == 0xC0 {
        2
    } else if byte & 0xF0 == 0xE0 {
        3
    } else if byte & 0xF8 == 0xF0 {
        4
    } else if byte & 0xFC == 0xF8 {
        5
    } else if byte & 0xFE == 0xFC {
        6
    } else {
        return LeadByte::Invalid;
    };

    let mask = (1u32 << (7 - len as u32)) - 1;
    LeadByte::Sequence {
        len,
        payload: byte as u32 & mask,
    }
}

/// True for `10xxxxxx`.
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Where the incremental decoder is in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeState {
    #[default]
    AwaitingSequenceStart,
    InMultibyteSequence,
}

/// Byte-at-a-time UTF-8 decoder.
///
/// ```
/// use lumen_text::{CodePoint, Utf8Decoder};
///
/// let mut decoder = Utf8Decoder::new();
/// assert_eq!(decoder.feed(0xE2), None);
/// assert_eq!(decoder.feed(0x82), None);
/// assert_eq!(decoder.feed(0xAC), Some(CodePoint::from('€')));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Utf8Decoder {
    state: DecodeState,
    decoded: u32,
    /// Bit position for the next continuation payload. A multiple of 6 while
    /// mid-sequence, meaningless otherwise.
    shift: u32,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    /// Number of continuation bytes still expected, 0 between sequences.
    pub fn pending(&self) -> u32 {
        match self.state {
            DecodeState::AwaitingSequenceStart => 0,
            DecodeState::InMultibyteSequence => self.shift / 6,
        }
    }

    /// Consume one byte, returning a code point when it completes a sequence.
    ///
    /// Invalid lead bytes are skipped. A non-continuation byte in the middle of
    /// a sequence abandons the sequence and is itself dropped, not reread as a
    /// new lead.
    pub fn feed(&mut self, byte: u8) -> Option<CodePoint> {
        match self.state {
            DecodeState::AwaitingSequenceStart => match classify_lead(byte) {
                LeadByte::Ascii => Some(CodePoint::new(byte as u32)),
                LeadByte::Sequence { len, payload } => {
                    self.shift = (len as u32 - 1) * 6;
                    self.decoded = payload << self.shift;
                    self.state = DecodeState::InMultibyteSequence;
                    None
                }
                LeadByte::Invalid => None,
            },
            DecodeState::InMultibyteSequence => {
                if !is_continuation(byte) {
                    self.state = DecodeState::AwaitingSequenceStart;
                    return None;
                }

                self.shift -= 6;
                self.decoded |= ((byte & 0x3F) as u32) << self.shift;
                if self.shift == 0 {
                    self.state = DecodeState::AwaitingSequenceStart;
                    Some(CodePoint::new(self.decoded))
                } else {
                    None
                }
            }
        }
    }

    /// Feed a run of bytes, yielding code points as they complete.
    ///
    /// State carries over to the next call, so a sequence may be split across
    /// runs.
    pub fn feed_bytes<'a>(&'a mut self, bytes: &'a [u8]) -> impl Iterator<Item = CodePoint> + 'a {
        bytes.iter().filter_map(move |&b| self.feed(b))
    }
}

/// Decode a complete buffer.
///
/// Malformed bytes are skipped. Because the whole buffer is available, a
/// sequence cut short by a non-continuation byte resumes decoding at that
/// byte instead of losing it. A sequence truncated by the end of the buffer
/// yields nothing.
///
/// ```
/// use lumen_text::{CodePoint, decode_utf8};
///
/// let decoded: Vec<CodePoint> = decode_utf8(b"\xFFa\xE2b").collect();
/// assert_eq!(decoded, vec![CodePoint::from('a'), CodePoint::from('b')]);
/// ```
pub fn decode_utf8(bytes: &[u8]) -> Utf8Chars<'_> {
    Utf8Chars { bytes, pos: 0 }
}

/// Iterator returned by [`decode_utf8`].
#[derive(Debug, Clone)]
pub struct Utf8Chars<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Utf8Chars<'_> {
    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &[u8] {
        &self.bytes[self.pos..]
    }
}

impl Iterator for Utf8Chars<'_> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        while let Some(&lead) = self.bytes.get(self.pos) {
            match classify_lead(lead) {
                LeadByte::Ascii => {
                    self.pos += 1;
                    return Some(CodePoint::new(lead as u32));
                }
                LeadByte::Invalid => self.pos += 1,
                LeadByte::Sequence { len, payload } => {
                    let end = self.pos + len as usize;
                    let mut value = payload;
                    let mut i = self.pos + 1;
                    while i < end {
                        match self.bytes.get(i) {
                            Some(&b) if is_continuation(b) => {
                                value = (value << 6) | (b & 0x3F) as u32;
                                i += 1;
                            }
                            _ => break,
                        }
                    }
                    self.pos = i;
                    if i == end {
                        return Some(CodePoint::new(value));
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bytes.len() - self.pos;
        (0, Some(left))
    }
}

impl std::iter::FusedIterator for Utf8Chars<'_> {}
