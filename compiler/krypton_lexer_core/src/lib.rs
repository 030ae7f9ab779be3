//! Low-level source decoding for Krypton.
//!
//! [`RuneReader`] turns any [`std::io::Read`] into a sequence of Unicode
//! scalar values. It knows nothing about tokens or positions: problems are
//! handed to a caller-supplied callback as [`ReadIssue`] values, and the
//! integration layer (`krypton_lexer`) attaches positions and turns them
//! into diagnostics.

mod rune_reader;

pub use rune_reader::{ReadIssue, RuneReader, BOM};
