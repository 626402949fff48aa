//! Stages that complete on their first poll.

use crate::core::{Stage, StageOutcome};
use std::fmt;
use std::time::Duration;

/// Runs a closure on each activation, then completes.
///
/// The closure is `Fn`, so it cannot carry state across activations that a
/// reset would leave behind. Side effects go through whatever it captures.
///
/// # Example
///
/// ```rust
/// use scoro::core::MachineOutcome;
/// use scoro::stages::Action;
/// use scoro::Machine;
///
/// let mut machine = Machine::new((Action::named("hello", || println!("hello")),));
/// assert_eq!(machine.step(), MachineOutcome::Finished);
/// ```
pub struct Action<F> {
    name: &'static str,
    action: F,
}

impl<F: Fn()> Action<F> {
    pub fn new(action: F) -> Self {
        Self::named("action", action)
    }

    pub fn named(name: &'static str, action: F) -> Self {
        Self { name, action }
    }
}

impl<F> fmt::Debug for Action<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

impl<F: Fn()> Stage for Action<F> {
    fn step(&mut self) -> StageOutcome {
        (self.action)();
        StageOutcome::Complete
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        self.name
    }
}

/// Completes immediately while advertising a suggested poll delay.
///
/// Placed first in a machine, it tells a driver how fast to poll before the
/// first `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hinted {
    wait_time: Duration,
}

impl Hinted {
    pub fn new(wait_time: Duration) -> Self {
        Self { wait_time }
    }

    pub fn wait_time(&self) -> Duration {
        self.wait_time
    }
}

impl Default for Hinted {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Stage for Hinted {
    fn step(&mut self) -> StageOutcome {
        StageOutcome::Complete
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "hinted"
    }

    fn poll_hint(&self) -> Option<Duration> {
        Some(self.wait_time)
    }
}
