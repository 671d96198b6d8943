//! Game bindings for Python.

use std::time::Duration;

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, InputPolicy, DEFAULT_GRID_COLUMNS, DEFAULT_MAX_MOVES};
use crate::session::MemoryGame;
use crate::view::FaceView;

use super::py_core::PyFlipOutcome;

/// Python wrapper for MemoryGame.
///
/// The frontend calls `advance(ms)` from its frame loop so match and
/// mismatch resolutions fire on time.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    game: MemoryGame,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed; `None` seeds from OS entropy
    /// - max_moves: Move budget
    /// - lock_during_match: Block input during the match confirmation delay
    #[new]
    #[pyo3(signature = (seed = None, max_moves = DEFAULT_MAX_MOVES, lock_during_match = true))]
    fn new(seed: Option<u64>, max_moves: u32, lock_during_match: bool) -> PyResult<Self> {
        let policy = if lock_during_match {
            InputPolicy::LockBothDelays
        } else {
            InputPolicy::LockMismatchOnly
        };
        let config = GameConfig::new()
            .with_max_moves(max_moves)
            .with_input_policy(policy);

        let game = match seed {
            Some(seed) => MemoryGame::new(config, seed),
            None => MemoryGame::with_entropy(config),
        }
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self { game })
    }

    /// Flip the card at `index`.
    fn flip_card(&mut self, index: usize) -> PyFlipOutcome {
        PyFlipOutcome(self.game.flip_card(index))
    }

    /// Deal a fresh board.
    fn reset(&mut self) {
        self.game.reset();
    }

    /// Advance the clock by `ms` milliseconds, returning resolutions applied.
    fn advance(&mut self, ms: u64) -> usize {
        self.game.advance(Duration::from_millis(ms))
    }

    /// Fire all pending resolutions.
    fn settle(&mut self) -> usize {
        self.game.settle()
    }

    /// Card faces: -1 for face-down, the symbol id otherwise.
    fn faces<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i32>> {
        let faces: Vec<i32> = self
            .game
            .snapshot()
            .cards
            .iter()
            .map(|card| match card.face {
                FaceView::Hidden => -1,
                FaceView::Revealed(symbol) | FaceView::Matched(symbol) => i32::from(symbol.raw()),
            })
            .collect();
        PyArray1::from_vec_bound(py, faces)
    }

    /// Display glyph per card; `None` for face-down cards.
    fn glyphs(&self) -> Vec<Option<String>> {
        self.game
            .snapshot()
            .cards
            .into_iter()
            .map(|card| card.glyph)
            .collect()
    }

    /// Board as text.
    #[pyo3(signature = (columns = DEFAULT_GRID_COLUMNS))]
    fn render(&self, columns: usize) -> String {
        self.game.snapshot().render_grid(columns)
    }

    /// Indices currently selected.
    #[getter]
    fn selection(&self) -> Vec<usize> {
        self.game.state().selection().to_vec()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.game.state().move_count()
    }

    #[getter]
    fn match_count(&self) -> u32 {
        self.game.state().match_count()
    }

    #[getter]
    fn max_moves(&self) -> u32 {
        self.game.config().max_moves
    }

    #[getter]
    fn pair_count(&self) -> usize {
        self.game.state().pair_count()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.game.state().is_game_over()
    }

    #[getter]
    fn input_locked(&self) -> bool {
        self.game.snapshot().input_locked
    }

    /// "won", "lost", or None while playing.
    #[getter]
    fn outcome(&self) -> Option<&'static str> {
        self.game.state().outcome().map(|outcome| match outcome {
            crate::core::Outcome::Won => "won",
            crate::core::Outcome::Lost => "lost",
        })
    }

    /// End-of-game message, if the game is over.
    #[getter]
    fn message(&self) -> Option<&'static str> {
        self.game.snapshot().message()
    }

    /// Seed of the shuffling RNG.
    #[getter]
    fn seed(&self) -> u64 {
        self.game.seed()
    }

    fn __repr__(&self) -> String {
        let state = self.game.state();
        let status = match state.outcome() {
            Some(crate::core::Outcome::Won) => "won",
            Some(crate::core::Outcome::Lost) => "lost",
            None => "playing",
        };
        format!(
            "MemoryGame(moves={}/{}, matches={}/{}, status={})",
            state.move_count(),
            self.game.config().max_moves,
            state.match_count(),
            state.pair_count(),
            status
        )
    }
}
