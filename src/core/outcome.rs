//! Result types for the two signaling conventions.
//!
//! A stage reports a [`StageOutcome`] to its dispatcher; a whole machine
//! reports a [`MachineOutcome`] to its driver. The two are distinct types so
//! that one can never be passed where the other is expected. The only bridge
//! between them is [`MachineOutcome::into_stage_outcome`].

use serde::{Deserialize, Serialize};

/// Raw per-stage result.
///
/// # Example
///
/// ```rust
/// use scoro::core::StageOutcome;
///
/// assert!(StageOutcome::Complete.is_complete());
/// assert!(!StageOutcome::Pending.is_complete());
/// assert_eq!(StageOutcome::from_ready(true), StageOutcome::Complete);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "a stage outcome decides whether the dispatcher advances"]
pub enum StageOutcome {
    /// The stage finished its work for this activation; retire it and advance.
    Complete,
    /// Not yet; poll the same stage again later.
    Pending,
}

impl StageOutcome {
    /// Build an outcome from a readiness condition.
    pub fn from_ready(ready: bool) -> Self {
        if ready {
            Self::Complete
        } else {
            Self::Pending
        }
    }

    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Composed whole-machine result.
///
/// # Example
///
/// ```rust
/// use scoro::core::{MachineOutcome, StageOutcome};
///
/// // Nesting adapter: an inner machine that finished completes its stage.
/// assert_eq!(MachineOutcome::Finished.into_stage_outcome(), StageOutcome::Complete);
/// assert_eq!(MachineOutcome::Running.into_stage_outcome(), StageOutcome::Pending);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "a machine outcome tells the driver whether to keep polling"]
pub enum MachineOutcome {
    /// The cursor has not reached the terminal position.
    Running,
    /// The cursor is at the terminal position.
    Finished,
}

impl MachineOutcome {
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Translate an inner machine's result into the raw result of the stage
    /// that owns it.
    ///
    /// `Finished` maps to `Complete` and `Running` maps to `Pending`. This is
    /// the only conversion between the two conventions.
    pub fn into_stage_outcome(self) -> StageOutcome {
        match self {
            Self::Finished => StageOutcome::Complete,
            Self::Running => StageOutcome::Pending,
        }
    }
}
