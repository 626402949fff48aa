//! Clock-driven delay stage.

use crate::clock::{elapsed_since, Clock};
use crate::core::{Stage, StageOutcome};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Pending until at least `wait` has elapsed since the stage was first
/// polled in the current activation.
///
/// Expiry is inclusive: the stage completes on the first poll where the
/// elapsed time is greater than or equal to `wait`, so a zero wait
/// completes on its first poll.
///
/// The start time is taken on the first poll, not at construction, so the
/// same stage can be reused across resets.
///
/// # Example
///
/// ```rust
/// use scoro::clock::ManualClock;
/// use scoro::core::MachineOutcome;
/// use scoro::stages::Delay;
/// use scoro::Machine;
/// use std::time::Duration;
///
/// let clock = ManualClock::default();
/// let mut machine = Machine::new((Delay::new(clock.clone(), Duration::from_millis(100)),));
///
/// assert_eq!(machine.step(), MachineOutcome::Running);
/// clock.advance(Duration::from_millis(101));
/// assert_eq!(machine.step(), MachineOutcome::Finished);
/// ```
#[derive(Clone, Debug)]
pub struct Delay<C> {
    clock: C,
    wait: Duration,
    started_at: Option<DateTime<Utc>>,
}

impl<C: Clock> Delay<C> {
    pub fn new(clock: C, wait: Duration) -> Self {
        Self {
            clock,
            wait,
            started_at: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// When the current activation started, if it has.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}

impl<C: Clock> Stage for Delay<C> {
    fn step(&mut self) -> StageOutcome {
        let now = self.clock.now();
        let started_at = *self.started_at.get_or_insert(now);
        StageOutcome::from_ready(elapsed_since(now, started_at) >= self.wait)
    }

    fn reset(&mut self) {
        self.started_at = None;
    }

    fn name(&self) -> &str {
        "delay"
    }

    /// Time left before expiry, or the full wait if not yet started.
    fn poll_hint(&self) -> Option<Duration> {
        let remaining = match self.started_at {
            Some(started_at) => self
                .wait
                .saturating_sub(elapsed_since(self.clock.now(), started_at)),
            None => self.wait,
        };
        Some(remaining)
    }
}
