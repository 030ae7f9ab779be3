//! Lexer for Krypton.
//!
//! Turns a byte stream of UTF-8 source into [`Token`]s. Two entry points
//! share one scanning engine:
//!
//! - [`lex`] / [`Lexer::spawn`] scan on a background thread and hand tokens
//!   over one at a time through [`Lexer::next_token`].
//! - [`tokenize`] scans a string to completion on the calling thread.
//!
//! Errors never stop scanning except for a failed read of the source.
//! Each one is passed to an [`ErrorHandler`] as it is found and counted.
//!
//! # Automatic semicolons
//!
//! A newline becomes a [`TokenKind::Semicolon`] with an empty literal when
//! the last token before it (comments aside) can end a statement: a
//! literal, `)`, `]`, `}`, `break`, `continue` or `return`.

mod config;
mod handler;
mod lex_error;
mod lexer;
mod scanner;

use std::io::{self, Read};
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Once};

pub use config::LexerConfig;
pub use handler::{ErrorCollector, ErrorHandler, IgnoreErrors};
pub use krypton_ir::{Position, Token, TokenKind};
pub use lex_error::{Found, LexError, LexErrorKind};
pub use lexer::Lexer;

use scanner::Scanner;

/// Start lexing `source` on a background thread with the default
/// [`LexerConfig`].
///
/// # Errors
///
/// Fails only if the scanner thread cannot be spawned.
pub fn lex<R, H>(source: R, handler: H) -> io::Result<Lexer>
where
    R: Read + Send + 'static,
    H: ErrorHandler,
{
    Lexer::spawn(&LexerConfig::default(), source, handler)
}

/// Everything scanned from one source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Tokens in source order, without the end-of-stream token.
    pub tokens: Vec<Token>,
    /// Errors in the order they were found.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan all of `source` on the calling thread.
pub fn tokenize(source: &str) -> LexOutput {
    let collector = ErrorCollector::new();
    let count = Arc::new(AtomicUsize::new(0));
    let mut tokens = Scanner::new(source.as_bytes(), collector.clone(), count, Vec::new()).run();
    if tokens.last().is_some_and(Token::is_eof) {
        tokens.pop();
    }

    LexOutput {
        tokens,
        errors: collector.take(),
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the lexer.
///
/// Safe to call multiple times; only the first call has an effect, and only
/// when `RUST_LOG` is set. Enable with `RUST_LOG=krypton_lexer=debug` or
/// `RUST_LOG=krypton_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
