//! Numeric literal scanning.
//!
//! Numbers must be recognized in full because C++14 digit separators
//! are single quotes: `0xFFFF'ABCD` would otherwise open a character
//! constant and swallow the rest of the file. The scanner emits every
//! byte verbatim on the code channel; its only side effects are
//! warnings. Shapes handled:
//!
//! ```text
//! 12345            decimal
//! 01234567         octal
//! 0xABCDEF12       hexadecimal
//! 0b01101100       binary (C++14)
//! 9.23  .987E+30   decimal floats (scanned in pieces)
//! 0xA.BCP12        hexadecimal float (C99)
//! 0B0110'1100      punctuated binary (C++14)
//! 234'567.123'987  punctuated decimal (C++14)
//! 0xA'B'C.B'Cp-12  punctuated hexadecimal float (C++17)
//! ```

use std::io::{BufRead, Write};
use std::io::Result as IoResult;

use crate::standard::Feature;
use super::Scanner;

/// Digit class for the separator check; one discriminator per literal
/// base instead of a function pointer per predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DigitKind {
    Decimal,
    Octal,
    Binary,
    Hex,
}

impl DigitKind {
    fn matches(self, byte: u8) -> bool {
        match self {
            DigitKind::Decimal => byte.is_ascii_digit(),
            DigitKind::Octal => (b'0'..=b'7').contains(&byte),
            DigitKind::Binary => byte == b'0' || byte == b'1',
            DigitKind::Hex => byte.is_ascii_hexdigit(),
        }
    }
}

impl<R: BufRead, W: Write, D: Write> Scanner<'_, R, W, D> {
    /// Dispatch on the first one or two bytes of a number. `c` is a
    /// digit, or `.` with a digit peeked behind it.
    pub(super) fn number(&mut self, c: u8) -> IoResult<()> {
        debug_assert!(c.is_ascii_digit() || c == b'.');
        let pc = self.src.peek()?;
        if c != b'0' {
            return self.decimal(c);
        }
        match pc {
            Some(b'x' | b'X') => self.hex(),
            Some(b'b' | b'B') => self.binary(),
            Some(d) if DigitKind::Octal.matches(d) => self.octal(),
            Some(b'\'') => self.octal(),
            Some(b'e' | b'E' | b'.') => self.decimal(c),
            Some(d) if d.is_ascii_digit() => {
                // 08, 09: not octal, not anything.
                self.remark(&format!("0{} read - bogus number!", d as char));
                self.out.code(c)
            }
            _ => {
                // Just a zero, e.g. array[0].
                self.out.code(c)
            }
        }
    }

    /// Digit-separator check, entered with `'` peeked. The quote is
    /// always consumed and emitted. Returns the byte the caller should
    /// treat as "previous digit" next: the peeked follower when the
    /// context is sane, otherwise the quote itself.
    fn check_punct(&mut self, prev: u8, kind: DigitKind) -> IoResult<u8> {
        let sq = self.src.get()?;
        debug_assert_eq!(sq, Some(b'\''));
        self.out.code(b'\'')?;
        if !self.cfg.features.num_punct {
            self.warn_feature(Feature::NumPunct);
        }
        if !kind.matches(prev) {
            self.warn("Single quote in numeric context not preceded by a valid digit");
            return Ok(b'\'');
        }
        match self.src.peek()? {
            None => {
                self.warn("Single quote in numeric context followed by EOF");
                Ok(b'\'')
            }
            Some(pc) => {
                if !kind.matches(pc) {
                    self.warn("Single quote in numeric context not followed by a valid digit");
                }
                Ok(pc)
            }
        }
    }

    /// Exponent part: the letter (known to be `e`/`E`/`p`/`P`, peeked),
    /// an optional sign, then one or more decimal digits.
    fn exponent(&mut self) -> IoResult<()> {
        let Some(e) = self.src.get()? else {
            return Ok(());
        };
        debug_assert!(matches!(e, b'e' | b'E' | b'p' | b'P'));
        self.out.code(e)?;
        if let Some(sign @ (b'+' | b'-')) = self.src.peek()? {
            self.src.get()?;
            self.out.code(sign)?;
        }
        let mut count = 0;
        while let Some(d) = self.src.peek()? {
            if !d.is_ascii_digit() {
                break;
            }
            self.src.get()?;
            self.out.code(d)?;
            count += 1;
        }
        if count == 0 {
            let msg = format!(
                "Exponent {} not followed by (optional sign and) one or more digits",
                e as char
            );
            self.warn(&msg);
        }
        Ok(())
    }

    /// Hexadecimal constant, integer or float; `0` read, `x`/`X` peeked.
    fn hex(&mut self) -> IoResult<()> {
        self.out.code(b'0')?;
        let Some(x) = self.src.get()? else {
            return Ok(());
        };
        self.out.code(x)?;
        let mut prev = x;
        let mut warned = false;
        let last = loop {
            match self.src.peek()? {
                Some(b'\'') => prev = self.check_punct(prev, DigitKind::Hex)?,
                Some(d) if d.is_ascii_hexdigit() || d == b'.' => {
                    if d == b'.' && !self.cfg.features.hex_float && !warned {
                        self.warn_feature(Feature::HexFloat);
                        warned = true;
                    }
                    prev = d;
                    self.src.get()?;
                    self.out.code(d)?;
                }
                other => break other,
            }
        };
        if matches!(last, Some(b'p' | b'P')) {
            if !self.cfg.features.hex_float && !warned {
                self.warn_feature(Feature::HexFloat);
            }
            self.exponent()?;
        }
        Ok(())
    }

    /// Binary constant; `0` read, `b`/`B` peeked.
    fn binary(&mut self) -> IoResult<()> {
        if !self.cfg.features.binary_literal {
            self.warn_feature(Feature::BinaryLiteral);
        }
        self.out.code(b'0')?;
        let Some(b) = self.src.get()? else {
            return Ok(());
        };
        self.out.code(b)?;
        let mut prev = b;
        let last = loop {
            match self.src.peek()? {
                Some(b'\'') => prev = self.check_punct(prev, DigitKind::Binary)?,
                Some(d) if DigitKind::Binary.matches(d) => {
                    prev = d;
                    self.src.get()?;
                    self.out.code(d)?;
                }
                other => break other,
            }
        };
        if let Some(d) = last
            && d.is_ascii_digit()
        {
            self.warn(&format!("Non-binary digit {} in binary constant", d as char));
        }
        Ok(())
    }

    /// Octal constant; `0` read, an octal digit or `'` peeked. A
    /// leading apostrophe is consumed as-is, without the separator
    /// check (legacy-compatible).
    fn octal(&mut self) -> IoResult<()> {
        self.out.code(b'0')?;
        let Some(first) = self.src.get()? else {
            return Ok(());
        };
        debug_assert!(DigitKind::Octal.matches(first) || first == b'\'');
        self.out.code(first)?;
        let mut prev = first;
        let last = loop {
            match self.src.peek()? {
                Some(b'\'') => prev = self.check_punct(prev, DigitKind::Octal)?,
                Some(d) if DigitKind::Octal.matches(d) => {
                    prev = d;
                    self.src.get()?;
                    self.out.code(d)?;
                }
                other => break other,
            }
        };
        if let Some(d) = last
            && d.is_ascii_digit()
        {
            self.warn(&format!("Non-octal digit {} in octal constant", d as char));
        }
        Ok(())
    }

    /// Decimal integer or the integral piece of a decimal float. `c`
    /// (a digit or `.`) is emitted; a run only follows when the next
    /// byte is a digit or a separator, so `9e3` leaves `e3` for the
    /// identifier scanner; emission is identical either way.
    fn decimal(&mut self, c: u8) -> IoResult<()> {
        self.out.code(c)?;
        if !matches!(self.src.peek()?, Some(d) if d.is_ascii_digit() || d == b'\'') {
            return Ok(());
        }
        let Some(first) = self.src.get()? else {
            return Ok(());
        };
        self.out.code(first)?;
        let mut prev = first;
        let last = loop {
            match self.src.peek()? {
                Some(b'\'') => prev = self.check_punct(prev, DigitKind::Decimal)?,
                Some(d) if d.is_ascii_digit() => {
                    prev = d;
                    self.src.get()?;
                    self.out.code(d)?;
                }
                other => break other,
            }
        };
        if matches!(last, Some(b'e' | b'E')) {
            self.exponent()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "number_test.rs"]
mod tests;
