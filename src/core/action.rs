//! Player input and move history.
//!
//! The presentation layer forwards exactly two kinds of input, flipping a
//! card and resetting the board. Completed moves are recorded so a finished
//! game can be replayed or inspected.

use serde::{Deserialize, Serialize};

/// Input forwarded by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Flip the card at this board index.
    Flip(usize),
    /// Deal a fresh board.
    Reset,
}

/// One completed two-card selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub number: u32,

    /// First card picked.
    pub first: usize,

    /// Second card picked.
    pub second: usize,

    /// Whether the two cards share a symbol.
    pub matched: bool,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(number: u32, first: usize, second: usize, matched: bool) -> Self {
        Self {
            number,
            first,
            second,
            matched,
        }
    }
}
