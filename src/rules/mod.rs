//! Game rules: flipping cards and resolving pairs.
//!
//! The rules are pure transition functions over an explicit
//! [`GameState`](crate::core::GameState). They never read a clock or hold
//! timers; the session layer schedules the returned resolutions.

pub mod engine;

pub use engine::{check_flip, flip_card, legal_flips, reset, resolve, FlipOutcome, IgnoreReason};
