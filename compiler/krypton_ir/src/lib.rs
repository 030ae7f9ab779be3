//! Krypton IR - shared lexical types.
//!
//! This crate holds the data the lexer produces and the parser consumes:
//! - [`Position`] for `line:column` source locations
//! - [`Token`] and [`TokenKind`] for the token stream
//! - the static keyword/operator vocabulary and its lookups
//!
//! # Token Bands
//!
//! [`TokenKind`] discriminants are grouped into contiguous bands (special,
//! literal, operator, keyword). Band membership is an open-interval test
//! against sentinel discriminants that no variant occupies, so category
//! checks are two integer comparisons.

mod position;
mod token;

pub use position::Position;
pub use token::{is_digit, Token, TokenKind};
