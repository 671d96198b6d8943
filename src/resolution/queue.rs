//! Time-ordered queue of pending resolutions.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::PendingResolution;

/// A pending resolution with its due time.
///
/// Entries due at the same instant fire in scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledResolution {
    /// Clock reading at which this fires.
    pub due_at: Duration,

    /// Scheduling order, breaks ties between equal due times.
    pub sequence: u64,

    pub pending: PendingResolution,
}

impl Ord for ScheduledResolution {
    // Reversed so `BinaryHeap` pops the earliest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_at
            .cmp(&self.due_at)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for ScheduledResolution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fire-once resolutions ordered by due time.
#[derive(Clone, Debug, Default)]
pub struct ResolutionQueue {
    entries: BinaryHeap<ScheduledResolution>,
    next_sequence: u64,
}

impl ResolutionQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `pending` to fire at `due_at`.
    pub fn schedule(&mut self, due_at: Duration, pending: PendingResolution) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push(ScheduledResolution {
            due_at,
            sequence,
            pending,
        });
    }

    /// Remove and return the earliest entry due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<PendingResolution> {
        if self.entries.peek()?.due_at > now {
            return None;
        }
        self.entries.pop().map(|entry| entry.pending)
    }

    /// Due time of the earliest entry.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.peek().map(|entry| entry.due_at)
    }

    /// Due time of the latest entry.
    #[must_use]
    pub fn last_due(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due_at).max()
    }

    /// Drop every entry not scheduled under `generation`.
    ///
    /// Returns the number of entries dropped.
    pub fn retain_generation(&mut self, generation: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.pending.generation == generation);
        before - self.entries.len()
    }

    /// Number of scheduled entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
