//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::rules::{FlipOutcome, IgnoreReason};

/// Python wrapper for FlipOutcome.
#[pyclass(name = "FlipOutcome")]
#[derive(Clone, Debug)]
pub struct PyFlipOutcome(pub FlipOutcome);

#[pymethods]
impl PyFlipOutcome {
    /// One of "ignored", "selected", "queued", "completed".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            FlipOutcome::Ignored(_) => "ignored",
            FlipOutcome::Selected { .. } => "selected",
            FlipOutcome::Queued { .. } => "queued",
            FlipOutcome::Completed { .. } => "completed",
        }
    }

    /// Whether the flip changed the board.
    #[getter]
    fn accepted(&self) -> bool {
        self.0.is_accepted()
    }

    /// Why the flip was ignored, if it was.
    #[getter]
    fn reason(&self) -> Option<&'static str> {
        match self.0 {
            FlipOutcome::Ignored(reason) => Some(reason_name(reason)),
            _ => None,
        }
    }

    /// Whether a completed pair was a match.
    #[getter]
    fn matched(&self) -> Option<bool> {
        self.0
            .pending()
            .map(|pending| pending.kind == crate::resolution::ResolutionKind::Match)
    }

    fn __repr__(&self) -> String {
        match self.reason() {
            Some(reason) => format!("FlipOutcome(ignored, reason={})", reason),
            None => format!("FlipOutcome({})", self.kind()),
        }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

fn reason_name(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::GameOver => "game_over",
        IgnoreReason::InputLocked => "input_locked",
        IgnoreReason::OutOfBounds => "out_of_bounds",
        IgnoreReason::SameCard => "same_card",
        IgnoreReason::AlreadyRevealed => "already_revealed",
        IgnoreReason::AlreadyMatched => "already_matched",
    }
}
