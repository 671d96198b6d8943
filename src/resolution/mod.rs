//! Delayed resolution of completed pairs.
//!
//! Once two cards are picked, the result is not applied right away:
//! - **Match**: committed after the match delay
//! - **Mismatch**: flipped back after the mismatch delay
//!
//! A [`PendingResolution`] records which pair to resolve and the board
//! generation it belongs to. The [`ResolutionQueue`] orders pending
//! resolutions by due time on a virtual clock that the caller advances, so
//! the core never sleeps or spawns timers of its own.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memo_match::resolution::{PendingResolution, ResolutionKind, ResolutionQueue};
//!
//! let mut queue = ResolutionQueue::new();
//! let pending = PendingResolution::new(0, ResolutionKind::Mismatch, 1, 4);
//! queue.schedule(Duration::from_millis(800), pending);
//!
//! assert!(queue.pop_due(Duration::from_millis(799)).is_none());
//! assert_eq!(queue.pop_due(Duration::from_millis(800)), Some(pending));
//! ```

mod queue;

pub use queue::{ResolutionQueue, ScheduledResolution};

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// What a resolution does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionKind {
    /// Commit both cards as matched.
    Match,
    /// Turn both cards face-down again.
    Mismatch,
}

impl ResolutionKind {
    /// Configured delay for this kind.
    #[must_use]
    pub fn delay(self, config: &GameConfig) -> Duration {
        match self {
            ResolutionKind::Match => config.match_delay,
            ResolutionKind::Mismatch => config.mismatch_delay,
        }
    }
}

/// A pair waiting for its resolution delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingResolution {
    /// Board generation this was scheduled under.
    pub generation: u64,

    pub kind: ResolutionKind,

    /// First card picked.
    pub first: usize,

    /// Second card picked.
    pub second: usize,
}

impl PendingResolution {
    /// Create a pending resolution.
    #[must_use]
    pub fn new(generation: u64, kind: ResolutionKind, first: usize, second: usize) -> Self {
        Self {
            generation,
            kind,
            first,
            second,
        }
    }

    /// Configured delay before this resolution fires.
    #[must_use]
    pub fn delay(&self, config: &GameConfig) -> Duration {
        self.kind.delay(config)
    }
}

/// Result of applying a fired resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveOutcome {
    /// The pair was committed; `won` is set when it was the last pair.
    Matched { won: bool },

    /// The pair was turned face-down.
    FlippedBack,

    /// Scheduled under an older board or for a pair no longer resolving.
    /// Nothing changed.
    Stale,
}

impl ResolveOutcome {
    /// Check whether the resolution changed the state.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, ResolveOutcome::Stale)
    }
}
