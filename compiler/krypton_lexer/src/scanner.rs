//! The scanning engine.
//!
//! A [`Scanner`] owns the rune source and walks it once, front to back,
//! handing each finished token to a [`TokenSink`]. It never looks back and
//! never looks further ahead than the current rune.
//!
//! # State
//!
//! - `current` is the rune under the cursor, `None` at end of input.
//! - `literal` holds the runes of the token being built; `start` is where
//!   that token began and `end` is the position of `current`.
//! - `insert_semi` records whether the last emitted token (comments aside)
//!   may end a statement, which turns the next newline into a semicolon.
//!
//! # Shutdown
//!
//! The scanner closes at end of input, after a fatal read failure, or when
//! the sink stops accepting tokens. Closing hands a final end-of-stream
//! token to the sink (unless the sink is gone); nothing is emitted or
//! reported after that.

mod number;
mod quoted;

use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossbeam::channel::Sender;
use krypton_ir::{Position, Token, TokenKind};
use krypton_lexer_core::RuneReader;
use tracing::{debug, trace, warn};

use crate::{ErrorHandler, LexError, LexErrorKind};

/// Where finished tokens go.
pub(crate) trait TokenSink {
    /// Hand over one token. Returns `false` once the receiving side is gone.
    fn accept(&mut self, token: Token) -> bool;
}

impl TokenSink for Vec<Token> {
    #[inline]
    fn accept(&mut self, token: Token) -> bool {
        self.push(token);
        true
    }
}

/// Blocks until the consumer takes the token.
impl TokenSink for Sender<Token> {
    #[inline]
    fn accept(&mut self, token: Token) -> bool {
        self.send(token).is_ok()
    }
}

/// Counts errors and forwards them to the handler.
struct Reporter<H> {
    handler: H,
    count: Arc<AtomicUsize>,
}

impl<H: ErrorHandler> Reporter<H> {
    fn raise(&mut self, pos: Position, kind: LexErrorKind) {
        self.count.fetch_add(1, Ordering::AcqRel);
        trace!(line = pos.line, column = pos.column, error = %kind, "raise");
        self.handler.handle(LexError::new(pos, kind));
    }
}

pub(crate) struct Scanner<R, H, S> {
    reader: RuneReader<R>,
    reporter: Reporter<H>,
    sink: S,

    current: Option<char>,
    literal: String,
    start: Position,
    end: Position,
    insert_semi: bool,
    closed: bool,
}

impl<R: Read, H: ErrorHandler, S: TokenSink> Scanner<R, H, S> {
    /// Create a scanner over `source` and read its first rune.
    ///
    /// Errors found while reading go to `handler` and bump `count`.
    pub(crate) fn new(source: R, handler: H, count: Arc<AtomicUsize>, sink: S) -> Self {
        let mut scanner = Scanner {
            reader: RuneReader::new(source),
            reporter: Reporter { handler, count },
            sink,
            current: None,
            literal: String::new(),
            start: Position::ORIGIN,
            end: Position::ORIGIN,
            insert_semi: false,
            closed: false,
        };
        scanner.current = scanner.read_rune(true);
        scanner
    }

    /// Scan to the end of input, then give the sink back.
    pub(crate) fn run(mut self) -> S {
        debug!("scanner started");
        while !self.closed {
            self.step();
        }
        self.sink
    }

    /// Scan one token, or skip one run of whitespace.
    fn step(&mut self) {
        match self.current {
            None => self.close(),
            Some(c) if c.is_alphabetic() => self.identifier(),
            Some('_') => self.single(TokenKind::Underscore),
            Some('\\') => self.escaped_identifier(),
            Some(c) if c.is_ascii_digit() => self.number(),
            Some('\'') => self.char_literal(),
            Some('"') => self.string_literal(),
            Some('#') => self.comment(),
            Some('\n') if self.insert_semi => self.emit(TokenKind::Semicolon),
            Some(c) if c.is_whitespace() => self.whitespace(),
            Some(c) if is_operator_start(c) => self.operator(),
            Some(c) => {
                self.raise(LexErrorKind::UnexpectedChar(c));
                self.single(TokenKind::Illegal);
            }
        }
    }

    // ─── Cursor ────────────────────────────────────────────────────────

    /// Read the next rune from the source, reporting decode problems at
    /// the current end position. A fatal read failure closes the scanner.
    fn read_rune(&mut self, first: bool) -> Option<char> {
        let reporter = &mut self.reporter;
        let at = self.end;
        let rune = self
            .reader
            .next(first, |issue| reporter.raise(at, issue.into()));

        if self.reader.is_closed() && !self.closed {
            warn!(line = at.line, column = at.column, "source read failed");
            self.close();
        }
        rune
    }

    /// Append the current rune to the literal and advance past it.
    /// Does nothing at end of input.
    fn consume(&mut self) {
        let Some(c) = self.current else {
            return;
        };
        self.literal.push(c);
        self.end.next_column();
        if c == '\n' {
            self.end.next_line();
        }
        self.current = self.read_rune(false);
    }

    /// Drop the literal and start the next token at the cursor.
    fn discard(&mut self) {
        self.literal.clear();
        self.start = self.end;
    }

    // ─── Output ────────────────────────────────────────────────────────

    fn emit(&mut self, kind: TokenKind) {
        if kind != TokenKind::Comment {
            self.insert_semi = kind.inserts_semicolon();
        }

        if !self.closed {
            let token = Token {
                kind,
                literal: std::mem::take(&mut self.literal),
                pos: self.start,
            };
            trace!(
                kind = %kind,
                line = token.pos.line,
                column = token.pos.column,
                "emit"
            );
            if !self.sink.accept(token) {
                debug!("token consumer gone, stopping");
                self.closed = true;
                self.current = None;
            }
        }

        self.discard();
    }

    /// Consume one rune and emit it as `kind`.
    fn single(&mut self, kind: TokenKind) {
        self.consume();
        self.emit(kind);
    }

    /// Report an error at the cursor.
    fn raise(&mut self, kind: LexErrorKind) {
        self.raise_at(self.end, kind);
    }

    /// Report an error at the start of the current token.
    fn raise_at_start(&mut self, kind: LexErrorKind) {
        self.raise_at(self.start, kind);
    }

    fn raise_at(&mut self, pos: Position, kind: LexErrorKind) {
        if !self.closed {
            self.reporter.raise(pos, kind);
        }
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.current = None;
        // The consumer may already be gone; there is nobody left to tell.
        let _ = self.sink.accept(Token::eof(self.start));
        debug!(
            errors = self.reporter.count.load(Ordering::Acquire),
            line = self.start.line,
            column = self.start.column,
            "scanner closed"
        );
    }

    // ─── Trivia ────────────────────────────────────────────────────────

    /// Skip a run of whitespace. A newline that must become a semicolon
    /// ends the run.
    fn whitespace(&mut self) {
        self.consume();
        while let Some(c) = self.current {
            if !c.is_whitespace() || (c == '\n' && self.insert_semi) {
                break;
            }
            self.consume();
        }
        self.discard();
    }

    /// `#` to the end of the line. The newline is not part of the comment.
    fn comment(&mut self) {
        while !matches!(self.current, None | Some('\n')) {
            self.consume();
        }
        self.emit(TokenKind::Comment);
    }

    // ─── Identifiers ───────────────────────────────────────────────────

    fn identifier(&mut self) {
        self.consume_word();
        let kind = TokenKind::keyword_or_ident(&self.literal);
        self.emit(kind);
    }

    /// `\name\` is an identifier even when `name` is a keyword. The
    /// backslashes stay in the literal.
    fn escaped_identifier(&mut self) {
        self.consume();
        self.consume_word();
        if self.current == Some('\\') {
            self.consume();
        } else {
            self.raise(LexErrorKind::UnterminatedEscapedIdent);
        }
        self.emit(TokenKind::Ident);
    }

    fn consume_word(&mut self) {
        while self
            .current
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.consume();
        }
    }

    // ─── Operators ─────────────────────────────────────────────────────

    /// Longest match: keep consuming while the literal plus the next rune
    /// still spells an operator.
    fn operator(&mut self) {
        self.consume();
        let mut candidate = String::with_capacity(4);
        while let Some(c) = self.current {
            candidate.clear();
            candidate.push_str(&self.literal);
            candidate.push(c);
            if !TokenKind::is_operator_literal(&candidate) {
                break;
            }
            self.consume();
        }
        let kind = TokenKind::operator(&self.literal).unwrap_or(TokenKind::Illegal);
        self.emit(kind);
    }
}

fn is_operator_start(c: char) -> bool {
    TokenKind::is_operator_literal(c.encode_utf8(&mut [0; 4]))
}
