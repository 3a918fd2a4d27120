//! Byte-stream access to the overlay.
//!
//! `Overlay` implements [`std::io::Write`], so formatted output can go
//! straight to the screen with `write!`. Bytes are decoded incrementally: a
//! multi-byte character split across writes is still printed once complete.

use std::io;

use lumen_render::{GraphicsContext, RectRenderer};

use crate::Overlay;

impl<G: GraphicsContext, R: RectRenderer> io::Write for Overlay<G, R> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
