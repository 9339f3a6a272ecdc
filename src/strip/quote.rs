//! Character-constant, string-literal, raw-string, and UCN scanning.
//!
//! On entry to each scanner the opening delimiter has already been
//! emitted on the code channel. Body bytes pass through the emitter's
//! replacement hook; delimiters never do.

use std::io::{BufRead, Write};
use std::io::Result as IoResult;

use crate::standard::Feature;
use super::Scanner;

/// A raw-string delimiter may be at most 16 bytes.
const MAX_RAW_MARKER: usize = 16;

/// Bytes that may not appear in a raw-string delimiter. Backslash being
/// forbidden means a double quote is impossible too, but it is listed
/// so the check reads like the rule.
fn invalid_marker_byte(c: u8) -> bool {
    matches!(c, b'"' | b')' | b' ' | b'\\' | b'\t' | 0x0b | 0x0c | b'\n' | 0)
}

impl<R: BufRead, W: Write, D: Write> Scanner<'_, R, W, D> {
    /// Scan a non-raw literal from after its opening quote to the
    /// matching unescaped quote. `what` names the literal kind in
    /// warnings ("character constant" or "string literal").
    ///
    /// An escape consumes the following byte without re-interpretation,
    /// so an escaped quote or escaped newline stays inside the literal.
    /// `'\<newline>'` is therefore scanned without a newline warning,
    /// and in `'\\<newline>n'` the newline after the doubled backslash
    /// is the phase-2 splice: it is emitted raw on the code channel,
    /// outside any body replacement.
    pub(super) fn endquote(&mut self, quote: u8, what: &str) -> IoResult<()> {
        loop {
            let Some(c) = self.src.get()? else {
                self.warn(&format!("EOF in {what}"));
                return Ok(());
            };
            if c == quote {
                self.out.code(quote)?;
                return Ok(());
            }
            self.out.quote_char(quote, c)?;
            if c == b'\\' {
                let Some(esc) = self.src.get()? else {
                    self.warn(&format!("EOF in {what}"));
                    return Ok(());
                };
                self.out.quote_char(quote, esc)?;
                if (esc == b'u' || esc == b'U') && !self.cfg.features.universal_char_names {
                    self.warn_feature(Feature::UniversalCharNames);
                }
                if esc == b'\\' && self.src.peek()? == Some(b'\n') {
                    self.src.get()?;
                    self.out.code(b'\n')?;
                }
            } else if c == b'\n' {
                // Tag the warning against the line the newline ended.
                let line = self.src.line() - 1;
                self.warn_at(line, &format!("newline in {what}"));
            }
        }
    }

    /// Scan a universal character name. The backslash has been read but
    /// not emitted; `letter` (`u` or `U`) has been peeked but not read.
    ///
    /// UCNs are not validated beyond their digit count (the input is
    /// assumed to be compilable), but detecting them is required to
    /// report their use under standards that lack them.
    pub(super) fn scan_ucn(&mut self, letter: u8) -> IoResult<()> {
        debug_assert!(letter == b'u' || letter == b'U');
        let ndigits = if letter == b'u' { 4 } else { 8 };
        if !self.cfg.features.universal_char_names {
            self.warn_feature(Feature::UniversalCharNames);
        }
        self.out.code(b'\\')?;
        self.src.get()?;
        self.out.code(letter)?;
        let mut digits = Vec::with_capacity(ndigits);
        let mut bad = None;
        let mut ok = true;
        for _ in 0..ndigits {
            match self.src.get()? {
                None => {
                    ok = false;
                    break;
                }
                Some(d) if d.is_ascii_hexdigit() => {
                    digits.push(d);
                    self.out.code(d)?;
                }
                Some(d) => {
                    ok = false;
                    bad = Some(d);
                    self.out.code(d)?;
                    break;
                }
            }
        }
        if !ok {
            let seen = String::from_utf8_lossy(&digits).into_owned();
            let msg = match bad {
                Some(b) => format!(
                    "Invalid UCN \\{}{}{} detected",
                    letter as char, seen, b as char
                ),
                None => format!("Invalid UCN \\{}{} detected", letter as char, seen),
            };
            self.warn(&msg);
        }
        Ok(())
    }

    /// Scan a raw string. The prefix (ending in `R`) has been emitted
    /// and its double quote consumed but not yet emitted.
    ///
    /// If the delimiter is well formed, the body runs to the first
    /// `)`+delimiter+`"`; nothing else terminates it, not backslash
    /// and not newline, and no splicing or trigraph processing applies
    /// inside. On a malformed delimiter the bytes read so far are
    /// emitted as string-body bytes and the rest is scanned as an
    /// ordinary string literal so the construct still terminates.
    pub(super) fn raw_string(&mut self, prefix: &[u8]) -> IoResult<()> {
        match self.raw_marker(prefix)? {
            Ok(marker) => {
                self.out.code(b'"')?;
                self.out.code_bytes(&marker)?;
                self.out.code(b'(')?;
                let open_line = self.src.line();
                self.raw_body(&marker, open_line)
            }
            Err(partial) => {
                self.out.code(b'"')?;
                self.out.quote_bytes(b'"', &partial)?;
                self.endquote(b'"', "string literal")
            }
        }
    }

    /// Read the d-char-sequence up to the opening parenthesis.
    ///
    /// `Ok(Ok(marker))` on success; `Ok(Err(bytes))` with everything
    /// read (including any offending byte) when the marker is invalid,
    /// over-long, or cut off by EOF.
    fn raw_marker(&mut self, prefix: &[u8]) -> IoResult<Result<Vec<u8>, Vec<u8>>> {
        let mut marker: Vec<u8> = Vec::new();
        loop {
            let Some(c) = self.src.get()? else {
                let msg = format!(
                    "Unexpected EOF in raw string d-char-sequence: {}\"{}",
                    String::from_utf8_lossy(prefix),
                    String::from_utf8_lossy(&marker),
                );
                self.warn(&msg);
                return Ok(Err(marker));
            };
            if c == b'(' {
                return Ok(Ok(marker));
            }
            if marker.len() >= MAX_RAW_MARKER {
                marker.push(c);
                let msg = format!(
                    "Too long a raw string d-char-sequence: {}\"{}",
                    String::from_utf8_lossy(prefix),
                    String::from_utf8_lossy(&marker),
                );
                self.warn(&msg);
                return Ok(Err(marker));
            }
            if invalid_marker_byte(c) {
                let quoted = if c.is_ascii_graphic() {
                    let escape = if c == b'\'' || c == b'\\' { "\\" } else { "" };
                    format!(" '{}{}'", escape, c as char)
                } else {
                    String::new()
                };
                let msg = format!(
                    "Invalid mark character (code {}{}) in d-char-sequence: {}\"{}",
                    c,
                    quoted,
                    String::from_utf8_lossy(prefix),
                    String::from_utf8_lossy(&marker),
                );
                self.warn(&msg);
                marker.push(c);
                return Ok(Err(marker));
            }
            marker.push(c);
        }
    }

    /// Scan the raw body for `)` + marker + `"`.
    ///
    /// `R"aa( )aa )aa"` is one raw string: the first `)aa` is content
    /// because no `"` follows it; the first `)`+marker+`"` found closes
    /// the literal. Closing delimiters are emitted unreplaced; body
    /// bytes (including a failed partial marker match) go through the
    /// string replacement.
    fn raw_body(&mut self, marker: &[u8], open_line: u32) -> IoResult<()> {
        while let Some(c) = self.src.get()? {
            if c != b')' {
                self.out.quote_char(b'"', c)?;
                continue;
            }
            let mut matched: Vec<u8> = Vec::with_capacity(marker.len());
            loop {
                let Some(c) = self.src.get()? else {
                    self.out.quote_char(b'"', b')')?;
                    self.out.quote_bytes(b'"', &matched)?;
                    break;
                };
                if c == b'"' && matched.len() == marker.len() {
                    self.out.code(b')')?;
                    self.out.code_bytes(marker)?;
                    self.out.code(b'"')?;
                    return Ok(());
                } else if matched.len() < marker.len() && c == marker[matched.len()] {
                    matched.push(c);
                } else if c == b')' {
                    // Flush the failed attempt, restart at this paren.
                    self.out.quote_char(b'"', b')')?;
                    self.out.quote_bytes(b'"', &matched)?;
                    matched.clear();
                } else {
                    self.out.quote_char(b'"', b')')?;
                    self.out.quote_bytes(b'"', &matched)?;
                    self.out.quote_char(b'"', c)?;
                    break;
                }
            }
        }
        self.warn_at(open_line, "Unexpected EOF in raw string starting at this line");
        Ok(())
    }
}

#[cfg(test)]
#[path = "quote_test.rs"]
mod tests;
