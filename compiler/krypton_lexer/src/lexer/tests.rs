use super::*;
use crate::{lex, tokenize, ErrorCollector, IgnoreErrors, LexError, LexErrorKind};
use krypton_ir::TokenKind;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::io::Cursor;

const PROGRAM: &str = "\
func main() {
    let x = 0x1F # answer
    if x >= '\\n' {
        return \"done\"
    }
}
";

/// Yields `prefix`, then fails every read.
struct Failing {
    prefix: Vec<u8>,
}

impl Read for Failing {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.prefix.is_empty() {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        }
        let n = self.prefix.len().min(buf.len());
        buf[..n].copy_from_slice(&self.prefix[..n]);
        self.prefix.drain(..n);
        Ok(n)
    }
}

// === Streaming ===

#[test]
fn streams_the_same_tokens_as_tokenize() {
    crate::init_tracing();
    let lexer = lex(PROGRAM.as_bytes(), IgnoreErrors).unwrap();
    let streamed: Vec<Token> = lexer.collect();
    assert_eq!(streamed, tokenize(PROGRAM).tokens);
}

#[test]
fn end_of_stream_repeats() {
    let mut lexer = lex("x".as_bytes(), IgnoreErrors).unwrap();
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x", Position::ORIGIN));

    let eof = Token::eof(Position::new(1, 2));
    assert_eq!(lexer.next_token(), eof);
    assert_eq!(lexer.next_token(), eof);
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next_token(), eof);
}

#[test]
fn empty_source_is_only_end_of_stream() {
    let mut lexer = lex(Cursor::new(Vec::new()), IgnoreErrors).unwrap();
    assert_eq!(lexer.next_token(), Token::eof(Position::ORIGIN));
    assert!(!lexer.has_errors());
}

// === Errors ===

#[test]
fn errors_reach_the_handler_in_order() {
    let source = "'' $ \"open";
    let collector = ErrorCollector::new();
    let lexer = lex(source.as_bytes(), collector.clone()).unwrap();
    let tokens: Vec<Token> = lexer.collect();

    assert_eq!(tokens, tokenize(source).tokens);
    assert_eq!(collector.errors(), tokenize(source).errors);
    assert_eq!(
        collector
            .errors()
            .iter()
            .map(|e| e.kind.clone())
            .collect::<Vec<_>>(),
        vec![
            LexErrorKind::EmptyChar,
            LexErrorKind::UnexpectedChar('$'),
            LexErrorKind::UnterminatedString,
        ]
    );
}

#[test]
fn error_count_covers_tokens_already_received() {
    let mut lexer = lex("'' x".as_bytes(), IgnoreErrors).unwrap();
    assert_eq!(lexer.next_token().kind, TokenKind::Char);
    assert_eq!(lexer.error_count(), 1);
    assert!(lexer.has_errors());

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    assert!(lexer.next_token().is_eof());
    assert_eq!(lexer.error_count(), 1);
}

#[test]
fn clean_source_has_no_errors() {
    let mut lexer = lex(PROGRAM.as_bytes(), IgnoreErrors).unwrap();
    while !lexer.next_token().is_eof() {}
    assert_eq!(lexer.error_count(), 0);
}

#[test]
fn read_failure_ends_the_stream() {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    let mut lexer = lex(
        Failing {
            prefix: b"let x".to_vec(),
        },
        move |err: LexError| sink.lock().push(err),
    )
    .unwrap();

    assert_eq!(lexer.next_token(), Token::new(TokenKind::Let, "let", Position::ORIGIN));
    assert_eq!(lexer.next_token(), Token::eof(Position::new(1, 5)));
    assert_eq!(lexer.next_token(), Token::eof(Position::new(1, 5)));
    assert_eq!(lexer.error_count(), 1);

    let errors = errors.lock();
    assert!(errors[0].is_fatal());
    assert_eq!(errors[0].to_string(), "1:6: read failure: reset");
}

// === Threading ===

#[test]
fn handler_runs_on_the_named_scanner_thread() {
    let name = Arc::new(Mutex::new(None));
    let seen = Arc::clone(&name);
    let config = LexerConfig::default()
        .with_thread_name("lexer-under-test")
        .with_stack_size(256 * 1024);

    let lexer = Lexer::spawn(&config, "$".as_bytes(), move |_: LexError| {
        *seen.lock() = std::thread::current().name().map(str::to_owned);
    })
    .unwrap();
    assert_eq!(lexer.count(), 1);
    assert_eq!(name.lock().as_deref(), Some("lexer-under-test"));
}

#[test]
fn default_config() {
    let config = LexerConfig::default();
    assert_eq!(config.thread_name, "krypton-lexer");
    assert_eq!(config.stack_size, None);
}

#[test]
fn dropping_the_lexer_stops_the_scanner() {
    let (sender, receiver) = channel::unbounded();
    let source = Cursor::new("$ ".repeat(1000).into_bytes());
    let mut lexer = lex(source, move |err: LexError| {
        let _ = sender.send(err);
    })
    .unwrap();

    assert_eq!(lexer.next_token().kind, TokenKind::Illegal);
    drop(lexer);

    // The handler, and the sender inside it, only drop once the scanner
    // thread has returned. It gets as far as the second token.
    assert_eq!(receiver.iter().count(), 2);
}
