//! Python bindings for the memory game.
//!
//! Lets a Python frontend (pygame, a notebook widget, a web server) drive the
//! game core.
//!
//! # Quick Start
//!
//! ```python
//! import memo_match
//!
//! game = memo_match.MemoryGame(seed=42)
//!
//! game.flip_card(0)
//! outcome = game.flip_card(5)
//! game.advance(800)
//!
//! print(game.render())
//! print(game.move_count, game.match_count, game.outcome)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// memo_match: a memory-matching game core.
#[pymodule]
fn memo_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFlipOutcome>()?;
    m.add_class::<PyMemoryGame>()?;

    m.add("MAX_MOVES", crate::core::DEFAULT_MAX_MOVES)?;
    m.add("SYMBOLS", crate::core::DEFAULT_SYMBOLS.to_vec())?;

    Ok(())
}
