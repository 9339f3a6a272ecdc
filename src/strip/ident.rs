//! Identifier and encoding-prefix scanning.
//!
//! Most identifiers are emitted as an opaque run of word bytes. The
//! complication is that some identifiers are really literal prefixes
//! glued to the quote that follows with no space allowed between:
//! `L"x"` in every standard, `u"x"`, `U"x"`, `u8"x"` from C11/C++11,
//! and the raw forms `R"y(x)y"`, `LR`, `uR`, `UR`, `u8R` from C++11.
//! Prefixes before character constants are not validated; that is a
//! compiler's concern, not a stripper's.

use std::io::{BufRead, Write};
use std::io::Result as IoResult;

use crate::standard::Feature;
use super::Scanner;

/// Prefixes of ordinary (non-raw) string literals.
const REG_PREFIXES: [&[u8]; 4] = [b"L", b"u", b"U", b"u8"];
/// Prefixes of raw string literals.
const RAW_PREFIXES: [&[u8]; 5] = [b"R", b"LR", b"uR", b"UR", b"u8R"];

/// Bytes that can begin or extend a string-literal encoding prefix.
fn could_be_prefix(byte: u8) -> bool {
    matches!(byte, b'L' | b'u' | b'U' | b'R' | b'8')
}

fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl<R: BufRead, W: Write, D: Write> Scanner<'_, R, W, D> {
    /// Scan an identifier starting at `c` (alphabetic or underscore).
    pub(super) fn identifier(&mut self, c: u8) -> IoResult<()> {
        debug_assert!(c.is_ascii_alphabetic() || c == b'_');
        if could_be_prefix(c) {
            self.possible_string_prefix(c)
        } else {
            self.out.code(c)?;
            self.rest_of_identifier()
        }
    }

    /// Emit the remaining word bytes of an identifier.
    fn rest_of_identifier(&mut self) -> IoResult<()> {
        while let Some(c) = self.src.peek()? {
            if !is_word(c) {
                break;
            }
            self.src.get()?;
            self.out.code(c)?;
        }
        Ok(())
    }

    /// Accumulate prefix bytes until a quote, a non-prefix byte, or a
    /// fourth prefix byte settles what this identifier is.
    fn possible_string_prefix(&mut self, c: u8) -> IoResult<()> {
        let mut prefix = Vec::with_capacity(4);
        prefix.push(c);
        loop {
            match self.src.peek()? {
                Some(q @ b'\'') => {
                    // Any prefix before a character constant scans the
                    // same way, valid or not.
                    self.out.code_bytes(&prefix)?;
                    self.src.get()?;
                    self.non_comment(q)?;
                    return Ok(());
                }
                Some(b'"') => {
                    if prefix_in(&prefix, &REG_PREFIXES) || prefix_in(&prefix, &RAW_PREFIXES) {
                        self.src.get()?;
                        return self.prefixed_string(&prefix);
                    }
                    // Identifier directly against a double quote:
                    // invalid syntax, scanned as two tokens.
                    self.out.code_bytes(&prefix)?;
                    self.src.get()?;
                    self.non_comment(b'"')?;
                    return Ok(());
                }
                Some(p) if could_be_prefix(p) => {
                    self.src.get()?;
                    prefix.push(p);
                    if prefix.len() > 3 {
                        self.out.code_bytes(&prefix)?;
                        return self.rest_of_identifier();
                    }
                }
                _ => {
                    self.out.code_bytes(&prefix)?;
                    return self.rest_of_identifier();
                }
            }
        }
    }

    /// Scan the string literal attached to a recognised prefix. The
    /// opening quote has been consumed but not emitted.
    fn prefixed_string(&mut self, prefix: &[u8]) -> IoResult<()> {
        if prefix_in(prefix, &RAW_PREFIXES) {
            if !self.cfg.features.raw_string {
                self.warn_feature(Feature::RawString);
            }
            self.out.code_bytes(prefix)?;
            self.raw_string(prefix)
        } else {
            if prefix != b"L" && !self.cfg.features.unicode_literal {
                self.warn_feature(Feature::UnicodeLiteral);
            }
            self.out.code_bytes(prefix)?;
            self.non_comment(b'"')?;
            Ok(())
        }
    }
}

fn prefix_in(prefix: &[u8], table: &[&[u8]]) -> bool {
    table.iter().any(|p| *p == prefix)
}

#[cfg(test)]
#[path = "ident_test.rs"]
mod tests;
