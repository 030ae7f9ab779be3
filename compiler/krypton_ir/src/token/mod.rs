//! Tokens produced by the Krypton lexer.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Position;

/// A single lexical element: its kind, the exact source text it was
/// scanned from, and where it starts.
///
/// Synthetic tokens (an inserted semicolon, end of stream) have an empty
/// literal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub pos: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, pos: Position) -> Self {
        Token {
            kind,
            literal: literal.into(),
            pos,
        }
    }

    /// The terminal end-of-stream token at `pos`.
    pub fn eof(pos: Position) -> Self {
        Token {
            kind: TokenKind::Eof,
            literal: String::new(),
            pos,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.literal, self.pos)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {:?}", self.pos, self.kind, self.literal)
    }
}

/// Wire shape: `{"type", "literal", "line", "column"}`.
#[cfg(feature = "serde")]
impl serde::Serialize for Token {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Token", 4)?;
        state.serialize_field("type", &self.kind)?;
        state.serialize_field("literal", &self.literal)?;
        state.serialize_field("line", &self.pos.line)?;
        state.serialize_field("column", &self.pos.column)?;
        state.end()
    }
}

/// Whether `c` is a digit in `base`.
///
/// Only bases 2, 8, 10 and 16 are meaningful to the lexer; `0` and `1`
/// are digits in all of them.
pub fn is_digit(c: char, base: u32) -> bool {
    match c {
        'a'..='f' | 'A'..='F' => base == 16,
        '8' | '9' => base >= 10,
        '2'..='7' => base >= 8,
        '0' | '1' => true,
        _ => false,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
