//! Nesting adapter: a whole machine acting as one stage.

use crate::core::{Stage, StageList, StageOutcome};
use crate::machine::Machine;
use std::time::Duration;

/// Stage whose private state is an exclusively owned inner [`Machine`].
///
/// Each poll steps the inner machine exactly once and reports
/// [`StageOutcome::Complete`] on the call where the inner machine finishes.
/// Resetting the stage resets the inner machine.
///
/// Stages with extra state of their own can hold a `Machine` field directly
/// and bridge with [`MachineOutcome::into_stage_outcome`] the same way.
///
/// [`MachineOutcome::into_stage_outcome`]: crate::core::MachineOutcome::into_stage_outcome
#[derive(Debug, Clone)]
pub struct Nested<L: StageList> {
    inner: Machine<L>,
    name: Option<&'static str>,
}

impl<L: StageList> Nested<L> {
    pub fn new(inner: Machine<L>) -> Self {
        Self { inner, name: None }
    }

    /// Same as [`new`](Self::new), with a name for logs and snapshots.
    pub fn named(name: &'static str, inner: Machine<L>) -> Self {
        Self {
            inner,
            name: Some(name),
        }
    }

    pub fn inner(&self) -> &Machine<L> {
        &self.inner
    }
}

impl<L: StageList> Stage for Nested<L> {
    fn step(&mut self) -> StageOutcome {
        self.inner.step().into_stage_outcome()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn name(&self) -> &str {
        self.name.unwrap_or("nested")
    }

    fn poll_hint(&self) -> Option<Duration> {
        self.inner.poll_hint()
    }
}
