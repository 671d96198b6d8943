//! Game state: the board, the selection phase and the counters.
//!
//! ## Phase
//!
//! The selection and the input lock are one explicit enum instead of a list
//! of indices plus a lock flag:
//! - `Idle`: nothing face-up and unresolved
//! - `OneSelected`: waiting for the second pick
//! - `ResolvingMatch` / `ResolvingMismatch`: two cards picked, waiting for
//!   the resolution delay
//!
//! ## Generation
//!
//! Every dealt board carries a generation number. Delayed resolutions record
//! the generation they were scheduled under and are ignored once it changes.
//!
//! `GameState` is replaced wholesale on reset, never patched back to a
//! fresh board.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::action::MoveRecord;
use super::card::{Card, CardFace};
use super::config::InputPolicy;

/// Indices of face-up, unresolved cards (0, 1 or 2 of them).
pub type Selection = SmallVec<[usize; 2]>;

/// Where the current selection stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No pending selection.
    #[default]
    Idle,

    /// One card face-up, waiting for a partner.
    OneSelected { first: usize },

    /// Two equal cards face-up, waiting for match confirmation.
    ///
    /// `next_pick` holds a first pick made during the confirmation delay.
    /// It stays `None` under [`InputPolicy::LockBothDelays`].
    ResolvingMatch {
        first: usize,
        second: usize,
        next_pick: Option<usize>,
    },

    /// Two different cards face-up, waiting to flip back.
    ResolvingMismatch { first: usize, second: usize },
}

impl Phase {
    /// Indices currently selected, in pick order.
    #[must_use]
    pub fn selection(&self) -> Selection {
        match *self {
            Phase::Idle => SmallVec::new(),
            Phase::OneSelected { first } => smallvec![first],
            Phase::ResolvingMatch { first, second, .. }
            | Phase::ResolvingMismatch { first, second } => smallvec![first, second],
        }
    }

    /// The pair awaiting resolution, if any.
    #[must_use]
    pub fn resolving_pair(&self) -> Option<(usize, usize)> {
        match *self {
            Phase::ResolvingMatch { first, second, .. }
            | Phase::ResolvingMismatch { first, second } => Some((first, second)),
            _ => None,
        }
    }

    /// Whether new flips are rejected under `policy`.
    #[must_use]
    pub fn is_input_locked(&self, policy: InputPolicy) -> bool {
        match *self {
            Phase::Idle | Phase::OneSelected { .. } => false,
            Phase::ResolvingMismatch { .. } => true,
            Phase::ResolvingMatch { next_pick, .. } => {
                policy == InputPolicy::LockBothDelays || next_pick.is_some()
            }
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every pair found.
    Won,
    /// Move budget exhausted first.
    Lost,
}

impl Outcome {
    /// End-of-game message for display.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => "🎉 You Win! Amazing memory skills! 🎉",
            Outcome::Lost => "😢 Game Over! You ran out of moves.",
        }
    }
}

/// Complete state of one dealt board.
///
/// Uses `im` persistent vectors so snapshots and clones are O(1).
///
/// States are only built from validated decks, inside the crate:
///
/// ```compile_fail
/// use memo_match::core::GameState;
///
/// let state = GameState::new(Vec::new(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) deck: Vector<Card>,
    pub(crate) phase: Phase,
    pub(crate) move_count: u32,
    pub(crate) match_count: u32,
    pub(crate) game_over: bool,
    pub(crate) generation: u64,
    pub(crate) history: Vector<MoveRecord>,
    pair_count: usize,
}

impl GameState {
    /// Create the state for a freshly dealt deck.
    ///
    /// `deck` must hold two cards per symbol. Decks come from
    /// [`DeckBuilder`](crate::deck::DeckBuilder), which checks that.
    #[must_use]
    pub(crate) fn new(deck: Vec<Card>, generation: u64) -> Self {
        let pair_count = deck.len() / 2;
        Self {
            deck: deck.into_iter().collect(),
            phase: Phase::Idle,
            move_count: 0,
            match_count: 0,
            game_over: false,
            generation,
            history: Vector::new(),
            pair_count,
        }
    }

    // === Board ===

    /// All cards in board order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter()
    }

    /// The card at a board index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.get(index)
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Number of pairs on the board (`N`).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub(crate) fn set_face(&mut self, index: usize, face: CardFace) {
        if let Some(card) = self.deck.get_mut(index) {
            card.face = face;
        }
    }

    // === Selection ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Indices currently face-up and unresolved.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.phase.selection()
    }

    /// Whether new flips are rejected under `policy`.
    #[must_use]
    pub fn is_input_locked(&self, policy: InputPolicy) -> bool {
        self.phase.is_input_locked(policy)
    }

    // === Counters ===

    /// Completed two-card selections.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Pairs committed as matched.
    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Completed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Termination ===

    /// Terminal flag. Set on a win or when the move budget runs out.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Every pair committed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.match_count as usize == self.pair_count
    }

    /// Outcome of a finished game, derived from the committed match count.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        Some(if self.is_complete() {
            Outcome::Won
        } else {
            Outcome::Lost
        })
    }
}
