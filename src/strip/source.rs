//! Pushback byte source with physical-line tracking.
//!
//! The scanners need one byte of lookahead (`peek`) and, in one place,
//! two bytes of pushback: `read_bsnl` may read a backslash, discover the
//! next byte is not a newline, and have to restore both. Host I/O
//! pushback is not guaranteed that deep, so a two-slot ring over the
//! buffered reader provides it explicitly. Only previously read bytes
//! may be pushed back.

use std::io::{self, BufRead};

/// Buffered byte reader with a two-deep pushback stack.
///
/// `line` is the 1-based physical line at the cursor: reading a newline
/// increments it, pushing one back decrements it, so warnings are tagged
/// correctly even while lookahead crosses line boundaries.
pub struct ByteSource<R> {
    inner: R,
    pushback: [u8; 2],
    pushed: usize,
    line: u32,
}

impl<R: BufRead> ByteSource<R> {
    pub fn new(inner: R) -> Self {
        ByteSource {
            inner,
            pushback: [0; 2],
            pushed: 0,
            line: 1,
        }
    }

    /// Current 1-based physical line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Read the next byte; `None` is end of input.
    pub fn get(&mut self) -> io::Result<Option<u8>> {
        let byte = if self.pushed > 0 {
            self.pushed -= 1;
            Some(self.pushback[self.pushed])
        } else {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                None
            } else {
                let b = buf[0];
                self.inner.consume(1);
                Some(b)
            }
        };
        if byte == Some(b'\n') {
            self.line += 1;
        }
        Ok(byte)
    }

    /// Push a previously read byte back; at most two may be pending.
    pub fn unget(&mut self, byte: u8) {
        debug_assert!(self.pushed < 2, "more than two bytes pushed back");
        if byte == b'\n' {
            self.line -= 1;
        }
        self.pushback[self.pushed] = byte;
        self.pushed += 1;
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        match self.get()? {
            Some(b) => {
                self.unget(b);
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }

    /// Count the backslash-newline pairs at the cursor.
    ///
    /// Leaves the cursor on the first byte that is not part of such a
    /// pair. A backslash not followed by a newline is restored together
    /// with the byte after it (this is the double pushback). The caller
    /// echoes the pairs back with `Emitter::bsnl` so the output keeps
    /// the input's line geometry.
    pub fn read_bsnl(&mut self) -> io::Result<u32> {
        let mut n = 0;
        while let Some(c) = self.peek()? {
            if c != b'\\' {
                break;
            }
            self.get()?; // the backslash
            match self.peek()? {
                Some(b'\n') => {
                    self.get()?;
                    n += 1;
                }
                _ => {
                    self.unget(b'\\');
                    break;
                }
            }
        }
        Ok(n)
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
