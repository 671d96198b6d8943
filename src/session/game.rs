//! Memory game session implementation.

use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::core::{
    Action, ConfigError, GameConfig, GameError, GameRng, GameRngState, GameState, SymbolId,
};
use crate::deck::DeckBuilder;
use crate::resolution::ResolutionQueue;
use crate::rules::{self, FlipOutcome};
use crate::view::GameSnapshot;

/// One player's game, from first deal through any number of resets.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    config: GameConfig,
    rng: GameRng,
    state: GameState,
    queue: ResolutionQueue,
    /// Virtual clock, advanced by the frontend.
    now: Duration,
}

impl MemoryGame {
    /// Start a game with a shuffled deck.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let deck = DeckBuilder::new(&config.alphabet).shuffled(&mut rng);
        info!(seed, pairs = config.pair_count(), max_moves = config.max_moves, "game started");
        Ok(Self::from_parts(config, rng, GameState::new(deck, 0)))
    }

    /// Start a game seeded from operating system entropy.
    pub fn with_entropy(config: GameConfig) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::from_entropy().seed())
    }

    /// Start a game with the first deck dealt in a fixed order.
    ///
    /// Later resets shuffle normally from `seed`.
    pub fn with_deck(config: GameConfig, seed: u64, order: &[SymbolId]) -> Result<Self, GameError> {
        config.validate()?;
        let deck = DeckBuilder::new(&config.alphabet).from_order(order)?;
        info!(seed, pairs = config.pair_count(), "game started with fixed deck");
        Ok(Self::from_parts(config, GameRng::new(seed), GameState::new(deck, 0)))
    }

    fn from_parts(config: GameConfig, rng: GameRng, state: GameState) -> Self {
        Self {
            config,
            rng,
            state,
            queue: ResolutionQueue::new(),
            now: Duration::ZERO,
        }
    }

    // === Input ===

    /// Flip the card at `index`.
    ///
    /// A completed pair is scheduled to resolve after the configured delay.
    #[instrument(skip(self))]
    pub fn flip_card(&mut self, index: usize) -> FlipOutcome {
        let outcome = rules::flip_card(&mut self.state, &self.config, index);
        if let Some(pending) = outcome.pending() {
            let due_at = self.now.saturating_add(pending.delay(&self.config));
            debug!(kind = ?pending.kind, ?due_at, "resolution scheduled");
            self.queue.schedule(due_at, pending);
        }
        outcome
    }

    /// Deal a fresh board.
    ///
    /// Resolutions still pending from the previous board are dropped.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let deck = DeckBuilder::new(&self.config.alphabet).shuffled(&mut self.rng);
        self.state = rules::reset(&self.state, deck);
        let dropped = self.queue.retain_generation(self.state.generation());
        info!(generation = self.state.generation(), dropped, "board reset");
    }

    /// Apply a frontend action.
    ///
    /// Returns the flip outcome for [`Action::Flip`], `None` for a reset.
    pub fn apply(&mut self, action: Action) -> Option<FlipOutcome> {
        match action {
            Action::Flip(index) => Some(self.flip_card(index)),
            Action::Reset => {
                self.reset();
                None
            }
        }
    }

    // === Time ===

    /// Move the clock forward and fire every resolution that became due.
    ///
    /// Returns the number of resolutions applied.
    #[instrument(skip(self))]
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        // The clock pins at `Duration::MAX` rather than overflowing.
        self.now = self.now.saturating_add(elapsed);

        let mut applied = 0;
        while let Some(pending) = self.queue.pop_due(self.now) {
            if rules::resolve(&mut self.state, &pending).is_applied() {
                applied += 1;
            }
        }
        applied
    }

    /// Fire everything still pending.
    pub fn settle(&mut self) -> usize {
        match self.queue.last_due() {
            Some(due_at) => self.advance(due_at.saturating_sub(self.now)),
            None => 0,
        }
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Time until the next resolution fires.
    #[must_use]
    pub fn next_resolution_in(&self) -> Option<Duration> {
        self.queue
            .next_due()
            .map(|due_at| due_at.saturating_sub(self.now))
    }

    /// Number of resolutions waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    // === Views ===

    /// Capture the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state, &self.config)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the shuffling RNG, for reproducing a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Position of the shuffling RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
