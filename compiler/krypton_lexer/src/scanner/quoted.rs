//! Character and string literals, and the escapes inside them.
//!
//! Both literals end at their closing quote and may not span lines. A
//! literal cut short by a newline or end of input is reported and dropped:
//! no token is emitted and scanning resumes at the newline.
//!
//! Escapes are validated but not decoded; the literal keeps its source
//! spelling.

use std::io::Read;

use krypton_ir::{is_digit, TokenKind};

use super::{Scanner, TokenSink};
use crate::{ErrorHandler, LexErrorKind};

impl<R: Read, H: ErrorHandler, S: TokenSink> Scanner<R, H, S> {
    pub(super) fn char_literal(&mut self) {
        self.consume();

        let mut runes = 0usize;
        while self.current != Some('\'') {
            if matches!(self.current, None | Some('\n')) {
                self.raise(LexErrorKind::UnterminatedChar);
                self.discard();
                return;
            }
            self.consume_quoted_rune('\'');
            runes += 1;
        }
        self.consume();

        match runes {
            0 => self.raise_at_start(LexErrorKind::EmptyChar),
            1 => {}
            _ => self.raise_at_start(LexErrorKind::TooManyChars),
        }
        self.emit(TokenKind::Char);
    }

    pub(super) fn string_literal(&mut self) {
        self.consume();

        while self.current != Some('"') {
            if matches!(self.current, None | Some('\n')) {
                self.raise(LexErrorKind::UnterminatedString);
                self.discard();
                return;
            }
            self.consume_quoted_rune('"');
        }
        self.consume();
        self.emit(TokenKind::String);
    }

    fn consume_quoted_rune(&mut self, quote: char) {
        if self.current == Some('\\') {
            self.consume_escape(quote);
        } else {
            self.consume();
        }
    }

    /// Consume a backslash escape.
    ///
    /// | Escape       | Meaning                       |
    /// |--------------|-------------------------------|
    /// | `\a \b \f \n \r \t \v \\` | control and backslash |
    /// | `\'` or `\"` | the enclosing quote only      |
    /// | `\xHH`       | byte value                    |
    /// | `\uHHHH`     | Unicode scalar value          |
    /// | `\UHHHHHHHH` | Unicode scalar value          |
    ///
    /// Any other prefix is reported and still consumed, a newline included,
    /// so the literal carries on to the next line. A backslash at end of
    /// input consumes nothing more; the enclosing literal reports itself
    /// unterminated.
    fn consume_escape(&mut self, quote: char) {
        self.consume();
        let prefix = match self.current {
            None => return,
            Some(c) => c,
        };

        let digits = match prefix {
            'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\' => 0,
            c if c == quote => 0,
            'x' => 2,
            'u' => 4,
            'U' => 8,
            _ => {
                self.raise(LexErrorKind::IllegalEscape(prefix));
                0
            }
        };
        self.consume();
        if digits == 0 {
            return;
        }

        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.current.filter(|&c| is_digit(c, 16)) {
                Some(c) => {
                    hex.push(c);
                    self.consume();
                }
                None => {
                    self.raise(LexErrorKind::EscapeDigits { prefix, digits });
                    return;
                }
            }
        }

        let valid = u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .is_some();
        if !valid {
            self.raise(LexErrorKind::InvalidCodepoint {
                prefix,
                digits: hex,
            });
        }
    }
}
