//! Game configuration.
//!
//! `GameConfig::default()` reproduces the classic board: twelve animal
//! pairs, twenty moves, 300 ms match confirmation and 800 ms mismatch
//! flip-back. Builder methods adjust individual settings; sessions call
//! [`GameConfig::validate`] before dealing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::symbol::Alphabet;

/// Move budget of the classic board.
pub const DEFAULT_MAX_MOVES: u32 = 20;

/// Delay before a matching pair is committed.
pub const DEFAULT_MATCH_DELAY: Duration = Duration::from_millis(300);

/// Delay before a mismatched pair is turned face-down again.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(800);

/// Column count of the classic board layout.
pub const DEFAULT_GRID_COLUMNS: usize = 6;

/// Which resolution delays block new flips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputPolicy {
    /// No flips while any pair is resolving.
    #[default]
    LockBothDelays,

    /// Only the mismatch delay blocks input. During match confirmation a
    /// single new first pick may be made; it becomes the selection once the
    /// match commits.
    LockMismatchOnly,
}

/// Complete configuration of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbols to pair up.
    pub alphabet: Alphabet,

    /// Completed moves allowed before the game is lost.
    pub max_moves: u32,

    /// Wait before committing a match.
    #[serde(with = "millis")]
    pub match_delay: Duration,

    /// Wait before flipping a mismatch back.
    #[serde(with = "millis")]
    pub mismatch_delay: Duration,

    /// Input gating during resolution.
    #[serde(default)]
    pub input_policy: InputPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            max_moves: DEFAULT_MAX_MOVES,
            match_delay: DEFAULT_MATCH_DELAY,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            input_policy: InputPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the move budget.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// Set both resolution delays.
    #[must_use]
    pub fn with_delays(mut self, match_delay: Duration, mismatch_delay: Duration) -> Self {
        self.match_delay = match_delay;
        self.mismatch_delay = mismatch_delay;
        self
    }

    /// Set the input policy.
    #[must_use]
    pub fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    /// Number of pairs on the board (`N`).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.alphabet.len()
    }

    /// Number of cards on the board (`2N`).
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.alphabet.len() * 2
    }

    /// Check the configuration can produce a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.max_moves == 0 {
            return Err(ConfigError::ZeroMoveBudget);
        }
        Ok(())
    }
}

/// Serialize a `Duration` as whole milliseconds.
mod millis {
    use std::time::Duration;

    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis())
            .map_err(|_| S::Error::custom("delay does not fit in u64 milliseconds"))?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
