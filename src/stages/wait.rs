//! Predicate-gated stage.

use crate::core::{Stage, StageOutcome};
use std::fmt;

/// Pending until its predicate returns `true`.
///
/// The predicate is evaluated once per poll. It is `Fn`, so it holds no
/// mutable state of its own that a reset could not restore; it reads
/// whatever external condition it waits on. Any bound on how long to wait
/// belongs in the predicate itself.
pub struct WaitUntil<P> {
    name: &'static str,
    ready: P,
    polls: u64,
}

impl<P: Fn() -> bool> WaitUntil<P> {
    pub fn new(ready: P) -> Self {
        Self::named("wait-until", ready)
    }

    pub fn named(name: &'static str, ready: P) -> Self {
        Self {
            name,
            ready,
            polls: 0,
        }
    }

    /// Polls made during the current activation.
    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl<P> fmt::Debug for WaitUntil<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitUntil")
            .field("name", &self.name)
            .field("polls", &self.polls)
            .finish()
    }
}

impl<P: Fn() -> bool> Stage for WaitUntil<P> {
    fn step(&mut self) -> StageOutcome {
        self.polls += 1;
        StageOutcome::from_ready((self.ready)())
    }

    fn reset(&mut self) {
        self.polls = 0;
    }

    fn name(&self) -> &str {
        self.name
    }
}
