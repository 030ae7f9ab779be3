//! Number literals.
//!
//! ```text
//! number   = prefix? digits ( "." digits )? exponent?
//! prefix   = "0x" | "0X" | "0o" | "0O" | "0b" | "0B" | "0"
//! exponent = ( "e" | "E" | "p" | "P" ) ( "+" | "-" )? decimal-digits
//! ```
//!
//! A lone leading `0` selects octal and needs no further digits. Fractions
//! and exponents only follow decimal and hexadecimal mantissas; `e` belongs
//! to decimal and `p` to hexadecimal.
//!
//! The scanned text is always emitted as a number token, even when a
//! required digit run was missing.

use std::io::Read;

use krypton_ir::{is_digit, TokenKind};

use super::{Scanner, TokenSink};
use crate::{ErrorHandler, LexErrorKind};

impl<R: Read, H: ErrorHandler, S: TokenSink> Scanner<R, H, S> {
    pub(super) fn number(&mut self) {
        self.scan_number();
        self.emit(TokenKind::Number);
    }

    fn scan_number(&mut self) {
        let (base, required) = self.number_prefix();
        if !self.consume_digits(base, required) || base < 10 {
            return;
        }

        if self.current == Some('.') {
            self.consume();
            if !self.consume_digits(base, true) {
                return;
            }
        }

        match self.current {
            Some('e' | 'E') if base == 10 => {}
            Some('p' | 'P') if base == 16 => {}
            Some(c @ ('p' | 'P')) => self.raise(LexErrorKind::HexExponentInDecimal(c)),
            _ => return,
        }
        self.consume();
        if matches!(self.current, Some('+' | '-')) {
            self.consume();
        }
        self.consume_digits(10, true);
    }

    /// Consume a base prefix, returning the base and whether at least one
    /// digit must follow.
    fn number_prefix(&mut self) -> (u32, bool) {
        if self.current != Some('0') {
            return (10, true);
        }
        self.consume();

        let base = match self.current {
            Some('x' | 'X') => 16,
            Some('o' | 'O') => 8,
            Some('b' | 'B') => 2,
            _ => return (8, false),
        };
        self.consume();
        (base, true)
    }

    /// Consume a run of digits in `base`. Returns `false`, after reporting
    /// the rune found instead, if `required` and the run is empty.
    fn consume_digits(&mut self, base: u32, required: bool) -> bool {
        let mut seen = false;
        while self.current.is_some_and(|c| is_digit(c, base)) {
            self.consume();
            seen = true;
        }

        if required && !seen {
            self.raise(LexErrorKind::ExpectedDigits {
                base,
                found: self.current.into(),
            });
            return false;
        }
        true
    }
}
