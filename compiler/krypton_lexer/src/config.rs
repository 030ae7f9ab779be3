//! Lexer configuration.

use std::thread;

/// How the scanner thread is started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Name given to the scanner thread.
    pub thread_name: String,
    /// Stack size for the scanner thread, or the platform default.
    pub stack_size: Option<usize>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            thread_name: "krypton-lexer".to_owned(),
            stack_size: None,
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub(crate) fn thread_builder(&self) -> thread::Builder {
        let builder = thread::Builder::new().name(self.thread_name.clone());
        match self.stack_size {
            Some(bytes) => builder.stack_size(bytes),
            None => builder,
        }
    }
}
