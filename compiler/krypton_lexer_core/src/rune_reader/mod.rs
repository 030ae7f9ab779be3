//! UTF-8 rune decoding over a byte stream.
//!
//! The reader pulls bytes through a [`BufReader`] into a lookahead of at
//! most four bytes (one encoded scalar), so a sequence split across two
//! reads of the underlying stream still decodes as one rune.
//!
//! # Recovery
//!
//! - An invalid sequence drops exactly its first byte, so every following
//!   byte gets its own chance to start a valid rune.
//! - A byte order mark is skipped silently only as the very first rune.
//! - Any I/O error other than [`io::ErrorKind::Interrupted`] is fatal: the
//!   reader closes and reports end of input from then on.

use std::io::{self, BufReader, Read};

/// The byte order mark, U+FEFF.
pub const BOM: char = '\u{FEFF}';

/// A problem found while decoding the source.
#[derive(Debug)]
pub enum ReadIssue {
    /// A byte sequence that is not valid UTF-8. One byte was dropped.
    IllegalUtf8,
    /// A byte order mark anywhere except the start of the source.
    UnexpectedBom,
    /// The underlying stream failed. The reader is now closed.
    Io(io::Error),
}

/// Outcome of decoding one unit from the lookahead.
enum Decoded {
    Eof,
    Rune(char),
    Illegal,
}

/// Decodes Unicode scalar values one at a time from a byte stream.
pub struct RuneReader<R> {
    source: BufReader<R>,
    /// Bytes read from `source` but not yet decoded. Never longer than 4.
    lookahead: Vec<u8>,
    /// Whether any rune has been returned yet.
    produced: bool,
    /// Set after a fatal read failure.
    closed: bool,
}

impl<R: Read> RuneReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source: BufReader::new(source),
            lookahead: Vec::with_capacity(4),
            produced: false,
            closed: false,
        }
    }

    /// Whether a fatal read failure has closed the reader.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Read the next rune, or `None` at end of input.
    ///
    /// `first` marks the read of the source's first rune; a leading byte
    /// order mark is dropped silently only then. Recoverable problems are
    /// passed to `report` and decoding continues with the next byte.
    pub fn next(&mut self, first: bool, mut report: impl FnMut(ReadIssue)) -> Option<char> {
        if self.closed {
            return None;
        }

        let mut first = first && !self.produced;
        loop {
            match self.decode() {
                Ok(Decoded::Eof) => return None,
                Ok(Decoded::Rune(BOM)) => {
                    if !first {
                        report(ReadIssue::UnexpectedBom);
                    }
                    // Even a legal leading mark makes the next rune non-first.
                    first = false;
                }
                Ok(Decoded::Rune(c)) => {
                    self.produced = true;
                    return Some(c);
                }
                Ok(Decoded::Illegal) => report(ReadIssue::IllegalUtf8),
                Err(err) => {
                    report(ReadIssue::Io(err));
                    self.closed = true;
                    return None;
                }
            }
        }
    }

    fn decode(&mut self) -> io::Result<Decoded> {
        self.fill(1)?;
        let Some(&lead) = self.lookahead.first() else {
            return Ok(Decoded::Eof);
        };

        let width = utf8_width(lead);
        if width == 0 {
            self.lookahead.remove(0);
            return Ok(Decoded::Illegal);
        }

        self.fill(width)?;
        let end = width.min(self.lookahead.len());
        let rune = std::str::from_utf8(&self.lookahead[..end])
            .ok()
            .and_then(|s| s.chars().next());

        match rune {
            // A complete, well-formed sequence always has exactly `width` bytes.
            Some(c) if end == width => {
                self.lookahead.drain(..width);
                Ok(Decoded::Rune(c))
            }
            _ => {
                self.lookahead.remove(0);
                Ok(Decoded::Illegal)
            }
        }
    }

    /// Top the lookahead up to `want` bytes, stopping early at end of input.
    fn fill(&mut self, want: usize) -> io::Result<()> {
        let mut byte = [0u8; 1];
        while self.lookahead.len() < want {
            match self.source.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => self.lookahead.push(byte[0]),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

/// Encoded length announced by a leading byte, or 0 if it cannot start a
/// sequence (continuation bytes, `0xC0`/`0xC1`, `0xF5..`).
const fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
