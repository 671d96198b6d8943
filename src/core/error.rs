//! Construction-time errors.
//!
//! Gameplay itself never fails: rejected flips and stale resolutions are
//! reported as outcomes, not errors. Only building an alphabet, a config or
//! a forced deck can be invalid.

use thiserror::Error;

use super::symbol::SymbolId;

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The alphabet has no symbols, so there is nothing to match.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// Two symbols share a glyph and could not be told apart.
    #[error("duplicate glyph {0:?} in alphabet")]
    DuplicateGlyph(String),

    /// More symbols than a `SymbolId` can address.
    #[error("alphabet of {len} symbols exceeds the supported maximum")]
    AlphabetTooLarge { len: usize },

    /// A zero move budget would end every game before the first move.
    #[error("move budget must be at least 1")]
    ZeroMoveBudget,
}

/// Invalid caller-supplied deck order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The order does not hold exactly two cards per symbol.
    #[error("deck must hold {expected} cards, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A symbol outside the alphabet.
    #[error("{0} is not part of the alphabet")]
    UnknownSymbol(SymbolId),

    /// A symbol present a number of times other than two.
    #[error("{symbol} appears {count} times, expected exactly 2")]
    NotPaired { symbol: SymbolId, count: usize },
}

/// Failure to start a game session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid deck: {0}")]
    Deck(#[from] DeckError),
}
