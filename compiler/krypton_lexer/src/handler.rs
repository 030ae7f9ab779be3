//! Error handlers.
//!
//! The scanner runs on its own thread, so a handler is moved there when the
//! lexer starts and is called from that thread for every error, in source
//! order.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::LexError;

/// Receives lexical errors as the scanner finds them.
pub trait ErrorHandler: Send + 'static {
    fn handle(&mut self, error: LexError);
}

impl<F> ErrorHandler for F
where
    F: FnMut(LexError) + Send + 'static,
{
    #[inline]
    fn handle(&mut self, error: LexError) {
        self(error);
    }
}

/// Drops every error. The lexer still counts them.
#[derive(Copy, Clone, Debug, Default)]
pub struct IgnoreErrors;

impl ErrorHandler for IgnoreErrors {
    #[inline]
    fn handle(&mut self, _error: LexError) {}
}

/// Collects errors into a list shared between clones.
///
/// Hand one clone to the lexer and keep another to read the errors back.
#[derive(Clone, Debug, Default)]
pub struct ErrorCollector {
    errors: Arc<Mutex<Vec<LexError>>>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the errors collected so far.
    pub fn errors(&self) -> Vec<LexError> {
        self.errors.lock().clone()
    }

    /// Remove and return the errors collected so far.
    pub fn take(&self) -> Vec<LexError> {
        std::mem::take(&mut *self.errors.lock())
    }

    pub fn len(&self) -> usize {
        self.errors.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.lock().is_empty()
    }
}

impl ErrorHandler for ErrorCollector {
    fn handle(&mut self, error: LexError) {
        self.errors.lock().push(error);
    }
}
