//! Comment-stripping lexer for C and C++ source.
//!
//! A single-pass streaming transducer: bytes come in from a pushback
//! source, go out on either the code channel or the comment channel,
//! and each C-style comment collapses to one space on the code channel.
//! Literal and number scanning exists only so their contents are never
//! mistaken for comment delimiters; nothing is parsed beyond tokens.
//!
//! Backslash-newline pairs (line splicing, translation phase 2) may
//! appear between any two logical characters, including inside `/*`,
//! `*/`, and `//`. Rather than splicing, the scanner counts the pairs
//! and echoes them back verbatim, so the output keeps the input's line
//! count and column geometry.

pub(crate) mod emit;
mod ident;
mod number;
mod quote;
pub(crate) mod source;

use std::io::{self, BufRead, Write};

use crate::diag::DiagSink;
use crate::standard::{Feature, Features, Standard};
use emit::{Channel, Emitter};
use source::ByteSource;

/// Process-wide scanning configuration, set once before the driver runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Emit only comment bytes; code goes nowhere (`-c`).
    pub emit_comments: bool,
    /// Emit newline bytes regardless of channel (`-n`).
    pub keep_newlines: bool,
    /// Warn about nested comments and stray end markers (`-w`).
    pub warn_nested: bool,
    /// Replacement byte for character-constant bodies (`-q`).
    pub quote_rep: Option<u8>,
    /// Replacement byte for string-literal bodies (`-s`).
    pub string_rep: Option<u8>,
    /// Selected language standard (`-S`).
    pub standard: Standard,
    /// Features the standard permits.
    pub features: Features,
}

impl Config {
    /// Default flags with the feature set of `standard`.
    pub fn with_standard(standard: Standard) -> Self {
        Config {
            emit_comments: false,
            keep_newlines: false,
            warn_nested: false,
            quote_rep: None,
            string_rep: None,
            features: Features::for_standard(standard),
            standard,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::with_standard(Standard::default())
    }
}

/// Top-level scanning state. The current mode uniquely determines which
/// handler sees the next byte; keep this exhaustive so a new state
/// forces every dispatch site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    NonComment,
    CComment,
    CppComment,
}

/// Strip (or extract) comments from one input stream.
///
/// Scanner state is per file; the caller constructs a fresh scanner for
/// each input. Warnings go to `diag`, transformed bytes to `out`.
pub fn strip<R: BufRead, W: Write, D: Write>(
    input: R,
    file: &str,
    cfg: &Config,
    out: &mut W,
    diag: &mut DiagSink<D>,
) -> io::Result<()> {
    Scanner::new(input, file, cfg, out, diag).run()
}

/// Per-file scanner: byte source, emitter, and state machine.
pub(crate) struct Scanner<'a, R: BufRead, W: Write, D: Write> {
    pub(crate) src: ByteSource<R>,
    pub(crate) out: Emitter<'a, W>,
    pub(crate) cfg: &'a Config,
    file: &'a str,
    diag: &'a mut DiagSink<D>,
    mode: Mode,
    /// Last line that got a nested-comment warning (dedup per line).
    last_nest_warn: u32,
    /// Last line that got a stray-end-marker warning (dedup per line).
    last_cend_warn: u32,
}

impl<'a, R: BufRead, W: Write, D: Write> Scanner<'a, R, W, D> {
    pub(crate) fn new(
        input: R,
        file: &'a str,
        cfg: &'a Config,
        out: &'a mut W,
        diag: &'a mut DiagSink<D>,
    ) -> Self {
        Scanner {
            src: ByteSource::new(input),
            out: Emitter::new(out, cfg),
            cfg,
            file,
            diag,
            mode: Mode::NonComment,
            last_nest_warn: 0,
            last_cend_warn: 0,
        }
    }

    fn run(&mut self) -> io::Result<()> {
        let mut prev = 0u8;
        while let Some(c) = self.src.get()? {
            self.mode = match self.mode {
                Mode::NonComment => self.non_comment(c)?,
                Mode::CComment => self.c_comment(c)?,
                Mode::CppComment => self.cpp_comment(c, prev)?,
            };
            prev = c;
        }
        // EOF closes a // comment implicitly; only a /* comment can be
        // left open.
        if self.mode == Mode::CComment {
            self.warn("unterminated C-style comment");
        }
        Ok(())
    }

    pub(crate) fn warn(&mut self, msg: &str) {
        self.diag.warn(self.file, self.src.line(), msg);
    }

    pub(crate) fn warn_at(&mut self, line: u32, msg: &str) {
        self.diag.warn(self.file, line, msg);
    }

    pub(crate) fn remark(&mut self, msg: &str) {
        self.diag.remark(msg);
    }

    /// Warn that `feature` is not permitted by the selected standard.
    pub(crate) fn warn_feature(&mut self, feature: Feature) {
        let msg = format!("{} {}", feature.unsupported_message(), self.cfg.standard);
        self.warn(&msg);
    }

    /// Handle one byte outside any comment.
    fn non_comment(&mut self, c: u8) -> io::Result<Mode> {
        let mut mode = Mode::NonComment;
        if c == b'*' && self.cfg.warn_nested && self.src.peek()? == Some(b'/') {
            // Star, backslash-newline, slash is not detected here.
            let line = self.src.line();
            if self.last_cend_warn != line {
                self.warn("C-style comment end marker not in a comment");
            }
            self.last_cend_warn = line;
        }
        if c == b'\'' {
            self.out.code(c)?;
            // Character constants are not limited to one byte: '\377',
            // 'ab', '/*' are all scanned as opaque sequences up to the
            // unescaped closing quote.
            self.endquote(b'\'', "character constant")?;
        } else if c == b'"' {
            self.out.code(c)?;
            self.endquote(b'"', "string literal")?;
        } else if c == b'/' {
            // Potential comment start; splice pairs may separate the
            // slash from the star (or second slash).
            let bsnl = self.src.read_bsnl()?;
            match self.src.peek()? {
                Some(b'*') => {
                    mode = Mode::CComment;
                    self.src.get()?;
                    self.out.comment(b'/')?;
                    self.out.bsnl(Channel::Comment, bsnl)?;
                    self.out.comment(b'*')?;
                }
                Some(b'/') if self.cfg.features.double_slash => {
                    mode = Mode::CppComment;
                    self.src.get()?;
                    self.out.comment(b'/')?;
                    self.out.bsnl(Channel::Comment, bsnl)?;
                    self.out.comment(b'/')?;
                }
                Some(b'/') => {
                    // Not a comment under this standard; the slashes
                    // stay in the code stream.
                    self.warn_feature(Feature::DoubleSlash);
                    self.src.get()?;
                    self.out.code(b'/')?;
                    self.out.bsnl(Channel::Code, bsnl)?;
                    self.out.code(b'/')?;
                }
                _ => {
                    self.out.code(b'/')?;
                    self.out.bsnl(Channel::Code, bsnl)?;
                }
            }
        } else if c.is_ascii_digit()
            || (c == b'.' && matches!(self.src.peek()?, Some(d) if d.is_ascii_digit()))
        {
            self.number(c)?;
        } else if c.is_ascii_alphabetic() || c == b'_' {
            self.identifier(c)?;
        } else if c == b'\\' {
            match self.src.peek()? {
                Some(letter @ (b'u' | b'U')) => self.scan_ucn(letter)?,
                _ => self.out.code(c)?,
            }
        } else {
            // Space, punctuation, non-ASCII bytes: pass through.
            self.out.code(c)?;
        }
        Ok(mode)
    }

    /// Handle one byte inside a `/* ... */` comment.
    fn c_comment(&mut self, c: u8) -> io::Result<Mode> {
        let mut mode = Mode::CComment;
        if c == b'*' {
            let bsnl = self.src.read_bsnl()?;
            if self.src.peek()? == Some(b'/') {
                mode = Mode::NonComment;
                self.src.get()?;
                self.out.comment(b'*')?;
                self.out.bsnl(Channel::Comment, bsnl)?;
                self.out.comment(b'/')?;
                // The whole comment collapses to one space.
                self.out.code(b' ')?;
            } else {
                self.out.comment(c)?;
                self.out.bsnl(Channel::Comment, bsnl)?;
            }
        } else if self.cfg.warn_nested && c == b'/' && self.src.peek()? == Some(b'*') {
            let line = self.src.line();
            if self.last_nest_warn != line {
                self.warn("nested C-style comment");
            }
            self.last_nest_warn = line;
            self.out.comment(c)?;
        } else {
            self.out.comment(c)?;
        }
        Ok(mode)
    }

    /// Handle one byte inside a `//` comment. `prev` is the previous
    /// input byte: a newline ends the comment only when not preceded by
    /// a backslash, so spliced lines keep the comment open.
    fn cpp_comment(&mut self, c: u8, prev: u8) -> io::Result<Mode> {
        if c == b'\n' && prev != b'\\' {
            self.out.code(c)?;
            Ok(Mode::NonComment)
        } else {
            self.out.comment(c)?;
            Ok(Mode::CppComment)
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
