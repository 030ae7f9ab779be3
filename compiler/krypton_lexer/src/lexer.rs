//! The concurrent lexer handle.
//!
//! [`Lexer::spawn`] starts a scanner on its own thread and returns the
//! consuming end. Tokens pass through a zero-capacity channel: the scanner
//! blocks on every token until [`Lexer::next_token`] takes it, so it never
//! runs more than one token ahead of the consumer.
//!
//! Dropping the handle disconnects the channel and the scanner thread
//! exits at its next hand-off. A handle that is kept alive but never
//! polled again leaves the scanner parked on that hand-off.

use std::io::{self, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossbeam::channel::{self, Receiver};
use krypton_ir::{Position, Token};
use tracing::debug;

use crate::scanner::Scanner;
use crate::{ErrorHandler, LexerConfig};

/// Consuming end of a running scanner.
pub struct Lexer {
    tokens: Receiver<Token>,
    errors: Arc<AtomicUsize>,
    /// The end-of-stream token, once seen. Returned for every later call.
    eof: Option<Token>,
    /// Position of the last token received.
    last: Position,
}

impl Lexer {
    /// Start scanning `source` on a new thread configured by `config`.
    ///
    /// Errors go to `handler`, which runs on the scanner thread.
    ///
    /// # Errors
    ///
    /// Returns the error from [`std::thread::Builder::spawn`] if the
    /// scanner thread cannot be started.
    pub fn spawn<R, H>(config: &LexerConfig, source: R, handler: H) -> io::Result<Lexer>
    where
        R: Read + Send + 'static,
        H: ErrorHandler,
    {
        let (sender, receiver) = channel::bounded(0);
        let errors = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&errors);

        config.thread_builder().spawn(move || {
            Scanner::new(source, handler, count, sender).run();
        })?;
        debug!(thread = %config.thread_name, "lexer spawned");

        Ok(Lexer {
            tokens: receiver,
            errors,
            eof: None,
            last: Position::ORIGIN,
        })
    }

    /// The next token in source order.
    ///
    /// Blocks until the scanner produces it. After the end-of-stream token
    /// has been returned once, every later call returns it again.
    pub fn next_token(&mut self) -> Token {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }

        // A scanner that vanished without saying goodbye (a panicking
        // handler) ends the stream where it stopped.
        let token = self
            .tokens
            .recv()
            .unwrap_or_else(|_| Token::eof(self.last));
        self.last = token.pos;
        if token.is_eof() {
            self.eof = Some(token.clone());
        }
        token
    }

    /// Number of errors reported so far.
    ///
    /// Every error reported before the token most recently returned by
    /// [`next_token`](Self::next_token) is counted.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Acquire)
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Yields every token up to, but not including, the end of the stream.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
