//! Lexical errors.
//!
//! Every error is reported through the lexer's [`ErrorHandler`] as it is
//! found and also bumps the lexer's error count. Only [`LexErrorKind::Io`]
//! stops scanning; everything else is recovered from in place.
//!
//! [`ErrorHandler`]: crate::ErrorHandler

use std::fmt;
use std::io;

use krypton_ir::Position;
use krypton_lexer_core::ReadIssue;
use thiserror::Error;

/// A lexical error and the position it was found at.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{pos}: {kind}")]
pub struct LexError {
    pub pos: Position,
    #[source]
    pub kind: LexErrorKind,
}

impl LexError {
    #[inline]
    pub fn new(pos: Position, kind: LexErrorKind) -> Self {
        LexError { pos, kind }
    }

    /// Whether scanning stopped because of this error.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    // === Source decoding ===
    #[error("illegal utf-8 encountered")]
    IllegalUtf8,

    #[error("unexpected byte order mark")]
    UnexpectedBom,

    /// The source stream failed. No token follows this error except the
    /// end-of-stream marker.
    #[error("read failure: {message}")]
    Io { kind: io::ErrorKind, message: String },

    // === Scanning ===
    #[error("unexpected rune {0:?} in source")]
    UnexpectedChar(char),

    #[error("expected digits of base {base}, found {found}")]
    ExpectedDigits { base: u32, found: Found },

    /// `p`/`P` after a decimal mantissa.
    #[error("hex exponent indicator {0:?} in decimal literal, use 'e' instead")]
    HexExponentInDecimal(char),

    #[error("unterminated character literal")]
    UnterminatedChar,

    #[error("empty character literal")]
    EmptyChar,

    #[error("too many characters in character literal")]
    TooManyChars,

    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `\name` identifier without its closing backslash. The identifier
    /// is still emitted, but the error is counted, so such input never
    /// scans without errors.
    #[error("unterminated escaped identifier")]
    UnterminatedEscapedIdent,

    // === Escapes ===
    #[error("illegal prefix {0:?} in escape literal")]
    IllegalEscape(char),

    #[error("\\{prefix} should be followed by {digits} hexadecimal digits")]
    EscapeDigits { prefix: char, digits: usize },

    #[error("\\{prefix}{digits} represents an invalid Unicode codepoint")]
    InvalidCodepoint { prefix: char, digits: String },
}

impl LexErrorKind {
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<ReadIssue> for LexErrorKind {
    fn from(issue: ReadIssue) -> Self {
        match issue {
            ReadIssue::IllegalUtf8 => Self::IllegalUtf8,
            ReadIssue::UnexpectedBom => Self::UnexpectedBom,
            ReadIssue::Io(err) => Self::Io {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// The rune found where something else was expected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Found {
    Rune(char),
    EndOfFile,
}

impl From<Option<char>> for Found {
    #[inline]
    fn from(rune: Option<char>) -> Self {
        rune.map_or(Found::EndOfFile, Found::Rune)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Rune(c) => write!(f, "{c:?}"),
            Found::EndOfFile => f.write_str("end of file"),
        }
    }
}
