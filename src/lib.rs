//! # memo-match
//!
//! The game core of a memory-matching (card pairs) game.
//!
//! A board of face-down cards is revealed two at a time. Matching pairs stay
//! face-up, mismatches flip back after a short delay, and the game is lost
//! if the move budget runs out before every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: The selection and input lock are one `Phase` enum,
//!    so states like "two unresolved picks while unlocked" cannot be built.
//!
//! 2. **Pure transitions**: `rules` functions take a `GameState` by
//!    reference and never read a clock. Timing is layered on top by
//!    `session`.
//!
//! 3. **Generation-tagged timers**: Every delayed resolution remembers the
//!    board it was scheduled for and does nothing once that board is gone.
//!
//! 4. **Deterministic**: Decks come from a seeded ChaCha8 stream, so a seed
//!    reproduces a whole session including resets.
//!
//! ## Modules
//!
//! - `core`: Symbols, cards, state, actions, RNG, configuration, errors
//! - `deck`: Deck building and shuffling
//! - `rules`: Flip and resolve transitions
//! - `resolution`: Pending resolutions and their time-ordered queue
//! - `session`: `MemoryGame`, the frontend-facing component
//! - `view`: Read-only snapshots for rendering

pub mod core;
pub mod deck;
pub mod resolution;
pub mod rules;
pub mod session;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, MoveRecord,
    Alphabet, SymbolId, DEFAULT_SYMBOLS,
    Card, CardFace, CardId,
    GameConfig, InputPolicy,
    DEFAULT_MAX_MOVES, DEFAULT_MATCH_DELAY, DEFAULT_MISMATCH_DELAY, DEFAULT_GRID_COLUMNS,
    ConfigError, DeckError, GameError,
    GameRng, GameRngState,
    GameState, Outcome, Phase, Selection,
};

pub use crate::deck::DeckBuilder;

pub use crate::resolution::{
    PendingResolution, ResolutionKind, ResolutionQueue, ResolveOutcome, ScheduledResolution,
};

pub use crate::rules::{FlipOutcome, IgnoreReason};

pub use crate::session::MemoryGame;

pub use crate::view::{CardView, FaceView, GameSnapshot};
