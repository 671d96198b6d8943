//! Transition functions for the matching game.
//!
//! All functions take the state by reference and the configuration
//! read-only; none of them touch the clock. Completing a pair returns a
//! [`PendingResolution`] for the caller to schedule, and [`resolve`] applies
//! it once its delay has elapsed.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Card, CardFace, GameConfig, GameState, MoveRecord, Phase, SymbolId};
use crate::resolution::{PendingResolution, ResolutionKind, ResolveOutcome};

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The game has ended.
    GameOver,
    /// A pair is resolving and the input policy blocks new picks.
    InputLocked,
    /// No card at that index.
    OutOfBounds,
    /// The card is the one already selected.
    SameCard,
    /// The card is already face-up and unresolved.
    AlreadyRevealed,
    /// The card is already paired.
    AlreadyMatched,
}

/// Result of a flip request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),

    /// The card became the first pick.
    Selected { index: usize },

    /// The card was picked during a match confirmation and becomes the
    /// first pick once the match commits.
    Queued { index: usize },

    /// The card completed a pair. The resolution must be scheduled.
    Completed {
        pending: PendingResolution,
        /// The move used up the budget and the game is lost.
        game_over: bool,
    },
}

impl FlipOutcome {
    /// Check whether the flip changed the state.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }

    /// The resolution to schedule, if the flip completed a pair.
    #[must_use]
    pub fn pending(&self) -> Option<PendingResolution> {
        match self {
            FlipOutcome::Completed { pending, .. } => Some(*pending),
            _ => None,
        }
    }
}

/// Check a flip without applying it.
pub fn check_flip(state: &GameState, config: &GameConfig, index: usize) -> Result<(), IgnoreReason> {
    if state.game_over {
        return Err(IgnoreReason::GameOver);
    }
    if state.phase.is_input_locked(config.input_policy) {
        return Err(IgnoreReason::InputLocked);
    }
    let card = state.card(index).ok_or(IgnoreReason::OutOfBounds)?;
    if state.phase == (Phase::OneSelected { first: index }) {
        return Err(IgnoreReason::SameCard);
    }
    match card.face {
        CardFace::Hidden => Ok(()),
        CardFace::Revealed => Err(IgnoreReason::AlreadyRevealed),
        CardFace::Matched => Err(IgnoreReason::AlreadyMatched),
    }
}

/// Flip the card at `index`.
///
/// Ignored flips leave the state untouched.
pub fn flip_card(state: &mut GameState, config: &GameConfig, index: usize) -> FlipOutcome {
    if let Err(reason) = check_flip(state, config, index) {
        trace!(index, ?reason, "flip ignored");
        return FlipOutcome::Ignored(reason);
    }

    match state.phase {
        Phase::Idle => {
            state.set_face(index, CardFace::Revealed);
            state.phase = Phase::OneSelected { first: index };
            debug!(index, "first pick");
            FlipOutcome::Selected { index }
        }
        Phase::OneSelected { first } => complete_pair(state, config, first, index),
        Phase::ResolvingMatch {
            first,
            second,
            next_pick: None,
        } => {
            state.set_face(index, CardFace::Revealed);
            state.phase = Phase::ResolvingMatch {
                first,
                second,
                next_pick: Some(index),
            };
            debug!(index, "first pick queued behind match confirmation");
            FlipOutcome::Queued { index }
        }
        // Unlocked phases are handled above; `check_flip` rejects the rest.
        Phase::ResolvingMatch { .. } | Phase::ResolvingMismatch { .. } => {
            FlipOutcome::Ignored(IgnoreReason::InputLocked)
        }
    }
}

fn complete_pair(state: &mut GameState, config: &GameConfig, first: usize, second: usize) -> FlipOutcome {
    state.set_face(second, CardFace::Revealed);
    state.move_count += 1;

    let matched = symbol_at(state, first) == symbol_at(state, second);
    state
        .history
        .push_back(MoveRecord::new(state.move_count, first, second, matched));

    // Judged on committed matches; a winning pair still in flight commits
    // the win when it resolves.
    let budget_spent = state.move_count >= config.max_moves && !state.is_complete();
    if budget_spent {
        state.game_over = true;
        debug!(moves = state.move_count, matches = state.match_count, "move budget exhausted");
    }

    let kind = if matched {
        state.phase = Phase::ResolvingMatch {
            first,
            second,
            next_pick: None,
        };
        ResolutionKind::Match
    } else {
        state.phase = Phase::ResolvingMismatch { first, second };
        ResolutionKind::Mismatch
    };

    debug!(first, second, ?kind, moves = state.move_count, "pair selected");

    FlipOutcome::Completed {
        pending: PendingResolution::new(state.generation, kind, first, second),
        game_over: budget_spent,
    }
}

fn symbol_at(state: &GameState, index: usize) -> Option<SymbolId> {
    state.card(index).map(|card| card.symbol)
}

/// Apply a resolution whose delay has elapsed.
///
/// Resolutions from an older generation, or for a pair that is no longer
/// resolving, are ignored. The win check reads the match count being
/// committed, not one captured when the pair was picked.
pub fn resolve(state: &mut GameState, pending: &PendingResolution) -> ResolveOutcome {
    if pending.generation != state.generation {
        trace!(
            scheduled = pending.generation,
            current = state.generation,
            "stale resolution dropped"
        );
        return ResolveOutcome::Stale;
    }

    let PendingResolution { first, second, .. } = *pending;

    match (pending.kind, state.phase) {
        (
            ResolutionKind::Match,
            Phase::ResolvingMatch {
                first: f,
                second: s,
                next_pick,
            },
        ) if (f, s) == (first, second) => {
            state.set_face(first, CardFace::Matched);
            state.set_face(second, CardFace::Matched);
            state.match_count += 1;
            state.phase = match next_pick {
                Some(index) => Phase::OneSelected { first: index },
                None => Phase::Idle,
            };

            let won = state.is_complete();
            if won {
                state.game_over = true;
                debug!(moves = state.move_count, "all pairs matched");
            }
            debug!(first, second, matches = state.match_count, "match committed");
            ResolveOutcome::Matched { won }
        }
        (ResolutionKind::Mismatch, Phase::ResolvingMismatch { first: f, second: s })
            if (f, s) == (first, second) =>
        {
            state.set_face(first, CardFace::Hidden);
            state.set_face(second, CardFace::Hidden);
            state.phase = Phase::Idle;
            debug!(first, second, "mismatch flipped back");
            ResolveOutcome::FlippedBack
        }
        _ => {
            trace!(first, second, phase = ?state.phase, "resolution does not match phase");
            ResolveOutcome::Stale
        }
    }
}

/// Deal a replacement state for a new board.
///
/// The generation advances so resolutions scheduled against `previous`
/// become stale.
#[must_use]
pub fn reset(previous: &GameState, deck: Vec<Card>) -> GameState {
    GameState::new(deck, previous.generation + 1)
}

/// Indices that would currently be accepted by [`flip_card`].
#[must_use]
pub fn legal_flips(state: &GameState, config: &GameConfig) -> Vec<usize> {
    (0..state.len())
        .filter(|&index| check_flip(state, config, index).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, InputPolicy, Outcome, SymbolId};
    use crate::deck::DeckBuilder;

    /// Board `[A, B, A, B]`.
    fn setup(max_moves: u32, policy: InputPolicy) -> (GameConfig, GameState) {
        let alphabet = Alphabet::new(["A", "B"]).unwrap();
        let (a, b) = (SymbolId::new(0), SymbolId::new(1));
        let deck = DeckBuilder::new(&alphabet).from_order(&[a, b, a, b]).unwrap();
        let config = GameConfig::new()
            .with_alphabet(alphabet)
            .with_max_moves(max_moves)
            .with_input_policy(policy);
        (config, GameState::new(deck, 0))
    }

    fn face(state: &GameState, index: usize) -> CardFace {
        state.card(index).map(|c| c.face).unwrap()
    }

    #[test]
    fn test_first_pick() {
        let (config, mut state) = setup(20, InputPolicy::LockBothDelays);

        let outcome = flip_card(&mut state, &config, 0);

        assert_eq!(outcome, FlipOutcome::Selected { index: 0 });
        assert_eq!(face(&state, 0), CardFace::Revealed);
        assert_eq!(state.selection().as_slice(), &[0]);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_same_card_ignored() {
        let (config, mut state) = setup(20, InputPolicy::LockBothDelays);
        flip_card(&mut state, &config, 0);
        let before = state.clone();

        let outcome = flip_card(&mut state, &config, 0);

        assert_eq!(outcome, FlipOutcome::Ignored(IgnoreReason::SameCard));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let (config, mut state) = setup(20, InputPolicy::LockBothDelays);
        let before = state.clone();

        assert_eq!(
            flip_card(&mut state, &config, 4),
            FlipOutcome::Ignored(IgnoreReason::OutOfBounds)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_match_resolution() {
        let (config, mut state) = setup(20, InputPolicy::LockBothDelays);
        flip_card(&mut state, &config, 0);
        let outcome = flip_card(&mut state, &config, 2);

        let pending = outcome.pending().unwrap();
        assert_eq!(pending.kind, ResolutionKind::Match);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.selection().as_slice(), &[0, 2]);
        assert!(state.is_input_locked(config.input_policy));

        let resolved = resolve(&mut state, &pending);

        assert_eq!(resolved, ResolveOutcome::Matched { won: false });
        assert_eq!(face(&state, 0), CardFace::Matched);
        assert_eq!(face(&state, 2), CardFace::Matched);
        assert_eq!(state.match_count(), 1);
        assert!(state.selection().is_empty());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_mismatch_resolution() {
        let (config, mut state) = setup(20, InputPolicy::LockMismatchOnly);
        flip_card(&mut state, &config, 0);
        let pending = flip_card(&mut state, &config, 1).pending().unwrap();

        assert_eq!(pending.kind, ResolutionKind::Mismatch);
        assert!(state.is_input_locked(config.input_policy));
        assert_eq!(
            flip_card(&mut state, &config, 2),
            FlipOutcome::Ignored(IgnoreReason::InputLocked)
        );

        assert_eq!(resolve(&mut state, &pending), ResolveOutcome::FlippedBack);
        assert_eq!(face(&state, 0), CardFace::Hidden);
        assert_eq!(face(&state, 1), CardFace::Hidden);
        assert!(state.selection().is_empty());
        assert!(!state.is_input_locked(config.input_policy));
    }

    #[test]
    fn test_matched_card_ignored() {
        let (config, mut state) = setup(20, InputPolicy::LockBothDelays);
        flip_card(&mut state, &config, 0);
        let pending = flip_card(&mut state, &config, 2).pending().unwrap();
        resolve(&mut state, &pending);

        assert_eq!(
            flip_card(&mut state, &config, 2),
            FlipOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
    }

    #[test]
    fn test_win() {
        let (config, mut state) = setup(20, InputPolicy::LockBothDelays);
        flip_card(&mut state, &config, 0);
        let first = flip_card(&mut state, &config, 2).pending().unwrap();
        resolve(&mut state, &first);
        flip_card(&mut state, &config, 1);
        let second = flip_card(&mut state, &config, 3).pending().unwrap();

        assert_eq!(resolve(&mut state, &second), ResolveOutcome::Matched { won: true });
        assert!(state.is_game_over());
        assert_eq!(state.outcome(), Some(Outcome::Won));
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_budget_loss_before_resolution() {
        let (config, mut state) = setup(1, InputPolicy::LockBothDelays);
        flip_card(&mut state, &config, 0);
        let outcome = flip_card(&mut state, &config, 1);

        assert!(matches!(outcome, FlipOutcome::Completed { game_over: true, .. }));
        assert!(state.is_game_over());
        assert_eq!(state.outcome(), Some(Outcome::Lost));

        // The in-flight flip-back still fires.
        let pending = outcome.pending().unwrap();
        assert_eq!(resolve(&mut state, &pending), ResolveOutcome::FlippedBack);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_final_pair_on_last_move_ends_then_wins() {
        let (config, mut state) = setup(2, InputPolicy::LockBothDelays);
        flip_card(&mut state, &config, 0);
        let first = flip_card(&mut state, &config, 2).pending().unwrap();
        resolve(&mut state, &first);
        flip_card(&mut state, &config, 1);
        let outcome = flip_card(&mut state, &config, 3);

        // The budget is spent before the last match commits.
        assert!(matches!(outcome, FlipOutcome::Completed { game_over: true, .. }));
        assert!(state.is_game_over());
        assert_eq!(state.match_count(), 1);

        let resolved = resolve(&mut state, &outcome.pending().unwrap());
        assert_eq!(resolved, ResolveOutcome::Matched { won: true });
        assert!(state.is_game_over());
        assert_eq!(state.outcome(), Some(Outcome::Won));
    }

    #[test]
    fn test_revealed_card_ignored_during_match_confirmation() {
        let (config, mut state) = setup(20, InputPolicy::LockMismatchOnly);
        flip_card(&mut state, &config, 0);
        flip_card(&mut state, &config, 2);
        let before = state.clone();

        assert_eq!(
            flip_card(&mut state, &config, 0),
            FlipOutcome::Ignored(IgnoreReason::AlreadyRevealed)
        );
        assert_eq!(
            flip_card(&mut state, &config, 2),
            FlipOutcome::Ignored(IgnoreReason::AlreadyRevealed)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_stale_generation_ignored() {
        let (config, mut state) = setup(20, InputPolicy::LockBothDelays);
        flip_card(&mut state, &config, 0);
        let pending = flip_card(&mut state, &config, 1).pending().unwrap();

        let deck = state.cards().copied().collect();
        let mut fresh = reset(&state, deck);
        let before = fresh.clone();

        assert_eq!(fresh.generation(), 1);
        assert_eq!(resolve(&mut fresh, &pending), ResolveOutcome::Stale);
        assert_eq!(fresh, before);
    }

    #[test]
    fn test_queued_pick_during_match_confirmation() {
        let (config, mut state) = setup(20, InputPolicy::LockMismatchOnly);
        flip_card(&mut state, &config, 0);
        let pending = flip_card(&mut state, &config, 2).pending().unwrap();

        assert_eq!(flip_card(&mut state, &config, 1), FlipOutcome::Queued { index: 1 });
        assert_eq!(face(&state, 1), CardFace::Revealed);
        assert_eq!(
            flip_card(&mut state, &config, 3),
            FlipOutcome::Ignored(IgnoreReason::InputLocked)
        );

        resolve(&mut state, &pending);
        assert_eq!(state.phase(), Phase::OneSelected { first: 1 });

        let last = flip_card(&mut state, &config, 3).pending().unwrap();
        assert_eq!(resolve(&mut state, &last), ResolveOutcome::Matched { won: true });
        assert_eq!(state.match_count(), 2);
    }

    #[test]
    fn test_history_records_moves() {
        let (config, mut state) = setup(20, InputPolicy::LockBothDelays);
        flip_card(&mut state, &config, 0);
        let pending = flip_card(&mut state, &config, 1).pending().unwrap();
        resolve(&mut state, &pending);
        flip_card(&mut state, &config, 0);
        flip_card(&mut state, &config, 2);

        let history: Vec<_> = state.history().iter().copied().collect();
        assert_eq!(
            history,
            vec![MoveRecord::new(1, 0, 1, false), MoveRecord::new(2, 0, 2, true)]
        );
    }

    #[test]
    fn test_legal_flips() {
        let (config, mut state) = setup(20, InputPolicy::LockBothDelays);
        assert_eq!(legal_flips(&state, &config), vec![0, 1, 2, 3]);

        flip_card(&mut state, &config, 0);
        assert_eq!(legal_flips(&state, &config), vec![1, 2, 3]);

        flip_card(&mut state, &config, 1);
        assert!(legal_flips(&state, &config).is_empty());
    }
}
