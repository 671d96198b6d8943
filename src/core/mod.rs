//! Core game types: symbols, cards, state, actions, RNG, configuration.
//!
//! Everything here is plain data. Transitions live in `rules`, timing in
//! `resolution`.

pub mod action;
pub mod card;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod symbol;

pub use action::{Action, MoveRecord};
pub use card::{Card, CardFace, CardId};
pub use config::{
    GameConfig, InputPolicy, DEFAULT_GRID_COLUMNS, DEFAULT_MATCH_DELAY, DEFAULT_MAX_MOVES,
    DEFAULT_MISMATCH_DELAY,
};
pub use error::{ConfigError, DeckError, GameError};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Outcome, Phase, Selection};
pub use symbol::{Alphabet, SymbolId, DEFAULT_SYMBOLS};
