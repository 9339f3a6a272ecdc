//! Two-channel output: code bytes and comment bytes.
//!
//! Exactly one channel reaches the output stream, selected by the
//! configuration (`-c` swaps them). Newlines can be forced through on
//! both channels (`-n`) so the output keeps the input's line count even
//! when comments spanning lines are stripped. Literal-body bytes go
//! through `quote_char`, which applies the `-q`/`-s` replacement byte.

use std::io::{self, Write};

use super::Config;

/// Which logical stream a byte belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Code,
    Comment,
}

/// Gated writer for the two output channels.
pub struct Emitter<'a, W: Write> {
    out: &'a mut W,
    emit_comments: bool,
    keep_newlines: bool,
    quote_rep: Option<u8>,
    string_rep: Option<u8>,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub fn new(out: &'a mut W, cfg: &Config) -> Self {
        Emitter {
            out,
            emit_comments: cfg.emit_comments,
            keep_newlines: cfg.keep_newlines,
            quote_rep: cfg.quote_rep,
            string_rep: cfg.string_rep,
        }
    }

    /// Write a byte on the given channel, subject to gating.
    pub fn put(&mut self, channel: Channel, byte: u8) -> io::Result<()> {
        let selected = match channel {
            Channel::Code => !self.emit_comments,
            Channel::Comment => self.emit_comments,
        };
        if selected || (self.keep_newlines && byte == b'\n') {
            self.out.write_all(&[byte])?;
        }
        Ok(())
    }

    pub fn code(&mut self, byte: u8) -> io::Result<()> {
        self.put(Channel::Code, byte)
    }

    pub fn comment(&mut self, byte: u8) -> io::Result<()> {
        self.put(Channel::Comment, byte)
    }

    pub fn code_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        for &b in bytes {
            self.code(b)?;
        }
        Ok(())
    }

    /// Write a literal-body byte, applying the replacement configured
    /// for the literal kind `quote` delimits. Delimiters themselves are
    /// written with `code`, never through here.
    pub fn quote_char(&mut self, quote: u8, byte: u8) -> io::Result<()> {
        let byte = match quote {
            b'\'' => self.quote_rep.unwrap_or(byte),
            b'"' => self.string_rep.unwrap_or(byte),
            _ => byte,
        };
        self.code(byte)
    }

    pub fn quote_bytes(&mut self, quote: u8, bytes: &[u8]) -> io::Result<()> {
        for &b in bytes {
            self.quote_char(quote, b)?;
        }
        Ok(())
    }

    /// Echo `count` backslash-newline pairs on the given channel,
    /// reproducing pairs consumed by `ByteSource::read_bsnl`.
    pub fn bsnl(&mut self, channel: Channel, count: u32) -> io::Result<()> {
        for _ in 0..count {
            self.put(channel, b'\\')?;
            self.put(channel, b'\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "emit_test.rs"]
mod tests;
