//! Line/column source positions.

use std::fmt;

/// A location in source text, 1-based in both dimensions.
///
/// Positions only move forward: [`next_column`](Self::next_column) and
/// [`next_line`](Self::next_line) are the only mutations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first column of the first line.
    pub const ORIGIN: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Step over one character on the current line. Saturates at
    /// `u32::MAX`.
    #[inline]
    pub fn next_column(&mut self) {
        self.column = self.column.saturating_add(1);
    }

    /// Move to the first column of the following line. Saturates at
    /// `u32::MAX`.
    #[inline]
    pub fn next_line(&mut self) {
        self.line = self.line.saturating_add(1);
        self.column = 1;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
