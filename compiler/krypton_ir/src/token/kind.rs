//! Token kinds for Krypton.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

// Band sentinels. Each sits in a discriminant gap that no variant uses, so
// `BEG < tag < END` selects exactly one band.
const LITERAL_BEG: u8 = 3;
const LITERAL_END: u8 = 8;
const OPERATOR_BEG: u8 = 9;
const OPERATOR_END: u8 = 49;
const KEYWORD_BEG: u8 = 50;
const KEYWORD_END: u8 = 67;

/// Token kinds for Krypton, with semantic band layout.
///
/// | Range | Band     |
/// |-------|----------|
/// | 0-2   | Special  |
/// | 4-7   | Literals |
/// | 10-48 | Operators and punctuation |
/// | 51-66 | Keywords |
///
/// Discriminants 3, 8, 9, 49, 50 and 67 are band sentinels.
///
/// # Invariant
///
/// Every non-empty prefix of a multi-rune operator is itself an operator
/// (`<` and `<<` for `<<=`). The scanner relies on this to find the longest
/// operator by growing the literal one rune at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Special (0-2) ===
    Eof = 0,
    Illegal = 1,
    Comment = 2,

    // === Literals (4-7) ===
    Ident = 4,  // main
    Number = 5, // 3.14
    Char = 6,   // 'a'
    String = 7, // "abc"

    // === Operators (10-48) ===
    Plus = 10,    // +
    Minus = 11,   // -
    Star = 12,    // *
    Slash = 13,   // /
    Percent = 14, // %

    Tilde = 15,    // ~
    Amp = 16,      // &
    Bar = 17,      // |
    Caret = 18,    // ^
    LessLess = 19, // <<
    MoreMore = 20, // >>

    PlusEqual = 21,    // +=
    MinusEqual = 22,   // -=
    StarEqual = 23,    // *=
    SlashEqual = 24,   // /=
    PercentEqual = 25, // %=

    AmpEqual = 26,      // &=
    BarEqual = 27,      // |=
    CaretEqual = 28,    // ^=
    LessLessEqual = 29, // <<=
    MoreMoreEqual = 30, // >>=

    EqualEqual = 31, // ==
    Less = 32,       // <
    More = 33,       // >
    Equal = 34,      // =
    Bang = 35,       // !

    BangEqual = 36, // !=
    LessEqual = 37, // <=
    MoreEqual = 38, // >=

    LeftParen = 39, // (
    LeftBrack = 40, // [
    LeftBrace = 41, // {
    Comma = 42,     // ,
    Period = 43,    // .

    RightParen = 44, // )
    RightBrack = 45, // ]
    RightBrace = 46, // }
    Semicolon = 47,  // ;
    Colon = 48,      // :

    // === Keywords (51-66) ===
    Underscore = 51, // _

    For = 52,
    If = 53,
    Else = 54,

    Let = 55,
    Const = 56,

    Func = 57,

    Break = 58,
    Continue = 59,
    Return = 60,
    Fallthrough = 61,

    Type = 62,
    Struct = 63,
    Enum = 64,
    Interface = 65,

    Namespace = 66,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 62] = [
        Self::Eof,
        Self::Illegal,
        Self::Comment,
        Self::Ident,
        Self::Number,
        Self::Char,
        Self::String,
        Self::Plus,
        Self::Minus,
        Self::Star,
        Self::Slash,
        Self::Percent,
        Self::Tilde,
        Self::Amp,
        Self::Bar,
        Self::Caret,
        Self::LessLess,
        Self::MoreMore,
        Self::PlusEqual,
        Self::MinusEqual,
        Self::StarEqual,
        Self::SlashEqual,
        Self::PercentEqual,
        Self::AmpEqual,
        Self::BarEqual,
        Self::CaretEqual,
        Self::LessLessEqual,
        Self::MoreMoreEqual,
        Self::EqualEqual,
        Self::Less,
        Self::More,
        Self::Equal,
        Self::Bang,
        Self::BangEqual,
        Self::LessEqual,
        Self::MoreEqual,
        Self::LeftParen,
        Self::LeftBrack,
        Self::LeftBrace,
        Self::Comma,
        Self::Period,
        Self::RightParen,
        Self::RightBrack,
        Self::RightBrace,
        Self::Semicolon,
        Self::Colon,
        Self::Underscore,
        Self::For,
        Self::If,
        Self::Else,
        Self::Let,
        Self::Const,
        Self::Func,
        Self::Break,
        Self::Continue,
        Self::Return,
        Self::Fallthrough,
        Self::Type,
        Self::Struct,
        Self::Enum,
        Self::Interface,
        Self::Namespace,
    ];

    /// `(name, literal)` for this kind.
    ///
    /// Kinds without a fixed spelling use `:NAME:` as their literal, which
    /// can never be produced by scanning.
    const fn info(self) -> (&'static str, &'static str) {
        match self {
            Self::Eof => ("EOF", ":EOF:"),
            Self::Illegal => ("ILLEGAL", ":ILLEGAL:"),
            Self::Comment => ("COMMENT", ":COMMENT:"),

            Self::Ident => ("IDENT", ":IDENT:"),
            Self::Number => ("NUMBER", ":NUMBER:"),
            Self::Char => ("CHAR", ":CHAR:"),
            Self::String => ("STRING", ":STRING:"),

            Self::Plus => ("PLUS", "+"),
            Self::Minus => ("MINUS", "-"),
            Self::Star => ("STAR", "*"),
            Self::Slash => ("SLASH", "/"),
            Self::Percent => ("PERCENT", "%"),

            Self::Tilde => ("TILDE", "~"),
            Self::Amp => ("AMPERSAND", "&"),
            Self::Bar => ("BAR", "|"),
            Self::Caret => ("CARET", "^"),
            Self::LessLess => ("LESS_LESS", "<<"),
            Self::MoreMore => ("MORE_MORE", ">>"),

            Self::PlusEqual => ("PLUS_EQUAL", "+="),
            Self::MinusEqual => ("MINUS_EQUAL", "-="),
            Self::StarEqual => ("STAR_EQUAL", "*="),
            Self::SlashEqual => ("SLASH_EQUAL", "/="),
            Self::PercentEqual => ("PERCENT_EQUAL", "%="),

            Self::AmpEqual => ("AMP_EQUAL", "&="),
            Self::BarEqual => ("BAR_EQUAL", "|="),
            Self::CaretEqual => ("CARET_EQUAL", "^="),
            Self::LessLessEqual => ("LESS_LESS_EQUAL", "<<="),
            Self::MoreMoreEqual => ("MORE_MORE_EQUAL", ">>="),

            Self::EqualEqual => ("EQUAL_EQUAL", "=="),
            Self::Less => ("LESS", "<"),
            Self::More => ("MORE", ">"),
            Self::Equal => ("EQUAL", "="),
            Self::Bang => ("BANG", "!"),

            Self::BangEqual => ("BANG_EQUAL", "!="),
            Self::LessEqual => ("LESS_EQUAL", "<="),
            Self::MoreEqual => ("MORE_EQUAL", ">="),

            Self::LeftParen => ("LEFT_PAREN", "("),
            Self::LeftBrack => ("LEFT_BRACK", "["),
            Self::LeftBrace => ("LEFT_BRACE", "{"),
            Self::Comma => ("COMMA", ","),
            Self::Period => ("PERIOD", "."),

            Self::RightParen => ("RIGHT_PAREN", ")"),
            Self::RightBrack => ("RIGHT_BRACK", "]"),
            Self::RightBrace => ("RIGHT_BRACE", "}"),
            Self::Semicolon => ("SEMICOLON", ";"),
            Self::Colon => ("COLON", ":"),

            Self::Underscore => ("UNDERSCORE", "_"),

            Self::For => ("FOR", "for"),
            Self::If => ("IF", "if"),
            Self::Else => ("ELSE", "else"),

            Self::Let => ("LET", "let"),
            Self::Const => ("CONST", "const"),

            Self::Func => ("FUNC", "func"),

            Self::Break => ("BREAK", "break"),
            Self::Continue => ("CONTINUE", "continue"),
            Self::Return => ("RETURN", "return"),
            Self::Fallthrough => ("FALLTHROUGH", "fallthrough"),

            Self::Type => ("TYPE", "type"),
            Self::Struct => ("STRUCT", "struct"),
            Self::Enum => ("ENUM", "enum"),
            Self::Interface => ("INTERFACE", "interface"),

            Self::Namespace => ("NAMESPACE", "namespace"),
        }
    }

    /// Stable uppercase name, used in diagnostics and test output.
    #[inline]
    pub const fn name(self) -> &'static str {
        self.info().0
    }

    /// Canonical spelling of this kind.
    #[inline]
    pub const fn literal(self) -> &'static str {
        self.info().1
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        let tag = self as u8;
        LITERAL_BEG < tag && tag < LITERAL_END
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        let tag = self as u8;
        OPERATOR_BEG < tag && tag < OPERATOR_END
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        let tag = self as u8;
        KEYWORD_BEG < tag && tag < KEYWORD_END
    }

    /// Whether a newline directly after this kind ends the statement.
    ///
    /// True for literals and for the tokens that can close a statement.
    pub const fn inserts_semicolon(self) -> bool {
        self.is_literal()
            || matches!(
                self,
                Self::RightParen
                    | Self::RightBrack
                    | Self::RightBrace
                    | Self::Break
                    | Self::Continue
                    | Self::Return
            )
    }

    /// Look up a kind by its canonical literal.
    #[inline]
    pub fn from_literal(text: &str) -> Option<TokenKind> {
        literal_table().get(text).copied()
    }

    /// Look up an operator by its lexeme.
    #[inline]
    pub fn operator(text: &str) -> Option<TokenKind> {
        Self::from_literal(text).filter(|kind| kind.is_operator())
    }

    /// Whether `text` is exactly an operator lexeme.
    #[inline]
    pub fn is_operator_literal(text: &str) -> bool {
        Self::operator(text).is_some()
    }

    /// Resolve scanned identifier text to its keyword kind, or
    /// [`TokenKind::Ident`] when it is not reserved.
    #[inline]
    pub fn keyword_or_ident(text: &str) -> TokenKind {
        Self::from_literal(text)
            .filter(|kind| kind.is_keyword())
            .unwrap_or(Self::Ident)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Built on first use; read-only afterwards.
static LITERAL_TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

fn literal_table() -> &'static FxHashMap<&'static str, TokenKind> {
    LITERAL_TABLE.get_or_init(|| {
        TokenKind::ALL
            .iter()
            .map(|&kind| (kind.literal(), kind))
            .collect()
    })
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
