//! The cursor/dispatcher and its reset controller.
//!
//! A [`Machine`] owns an ordered [`StageList`] and a cursor into it. Each
//! call to [`Machine::step`] polls the active stage and keeps advancing
//! through stages that complete immediately, returning as soon as one stage
//! is pending or the list is exhausted.

mod nested;

pub use nested::Nested;

use crate::core::{MachineOutcome, StageList, StageOutcome};
use crate::snapshot::{MachineSnapshot, SNAPSHOT_VERSION};
use std::time::Duration;
use tracing::{debug, trace};

/// A composed, step-at-a-time sequence of stages.
///
/// # Example
///
/// ```rust
/// use scoro::core::{MachineOutcome, Stage, StageOutcome};
/// use scoro::Machine;
///
/// struct Ready;
///
/// impl Stage for Ready {
///     fn step(&mut self) -> StageOutcome {
///         StageOutcome::Complete
///     }
///
///     fn reset(&mut self) {}
/// }
///
/// let mut machine = Machine::new((Ready, Ready, Ready));
///
/// // Stages that complete immediately all run within one call.
/// assert_eq!(machine.step(), MachineOutcome::Finished);
/// assert_eq!(machine.cursor(), 3);
///
/// machine.reset();
/// assert_eq!(machine.cursor(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Machine<L: StageList> {
    stages: L,
    cursor: usize,
    polls: u64,
    runs_completed: u64,
}

impl<L: StageList> Machine<L> {
    /// Create a machine positioned at its first stage.
    pub fn new(stages: L) -> Self {
        Self {
            stages,
            cursor: 0,
            polls: 0,
            runs_completed: 0,
        }
    }

    /// Advance through zero or more stages.
    ///
    /// Returns [`MachineOutcome::Finished`] without touching any stage when
    /// the cursor is already terminal. Otherwise polls the active stage,
    /// retiring it and moving on for as long as stages report
    /// [`StageOutcome::Complete`].
    pub fn step(&mut self) -> MachineOutcome {
        let len = self.stages.len();
        if self.cursor >= len {
            return MachineOutcome::Finished;
        }

        self.polls += 1;
        loop {
            match self.stages.step_at(self.cursor) {
                Some(StageOutcome::Pending) => return MachineOutcome::Running,
                Some(StageOutcome::Complete) => {
                    trace!(
                        stage = self.stages.name_at(self.cursor).unwrap_or_default(),
                        index = self.cursor,
                        "stage retired"
                    );
                    self.cursor += 1;
                }
                None => self.cursor = len,
            }

            if self.cursor >= len {
                self.runs_completed += 1;
                debug!(
                    stages = len,
                    polls = self.polls,
                    runs_completed = self.runs_completed,
                    "machine finished"
                );
                return MachineOutcome::Finished;
            }
        }
    }

    /// Return to the first stage and reset every stage's private state.
    ///
    /// Safe at any cursor position. The active stage is not notified; it is
    /// simply reset along with the others.
    pub fn reset(&mut self) {
        debug!(
            cursor = self.cursor,
            stages = self.stages.len(),
            "machine reset"
        );
        self.cursor = 0;
        self.stages.reset_all();
    }

    /// Current cursor, in `0..=len()`. `len()` is the terminal position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`; machines cannot be built without stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.stages.len()
    }

    /// Name of the active stage, or `None` at the terminal position.
    pub fn active_stage(&self) -> Option<&str> {
        self.stages.name_at(self.cursor)
    }

    /// The active stage's suggested delay before the next poll.
    pub fn poll_hint(&self) -> Option<Duration> {
        self.stages.poll_hint_at(self.cursor)
    }

    /// Number of `step` calls made while the machine was not terminal.
    ///
    /// Not cleared by [`reset`](Self::reset).
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Number of times the machine has reached its terminal position.
    pub fn runs_completed(&self) -> u64 {
        self.runs_completed
    }

    pub fn stages(&self) -> &L {
        &self.stages
    }

    /// Capture a serializable view of the machine's progress.
    ///
    /// Stage private state is not included.
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            version: SNAPSHOT_VERSION,
            cursor: self.cursor,
            len: self.stages.len(),
            active_stage: self.active_stage().map(str::to_owned),
            finished: self.is_finished(),
            polls: self.polls,
            runs_completed: self.runs_completed,
        }
    }

    /// Wrap this machine so it can sit in another machine's stage list.
    pub fn into_nested(self) -> Nested<L> {
        Nested::new(self)
    }
}

impl<L: StageList + Default> Default for Machine<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}
