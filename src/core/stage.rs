//! The stage contract.
//!
//! A stage is one unit of cooperative work. It owns its private state,
//! advances only when its dispatcher polls it, and can be restored to its
//! construction-time state on reset.

use crate::core::outcome::StageOutcome;
use std::time::Duration;

/// A single step-wise unit of work inside a machine.
///
/// # Contract
///
/// - `step` never blocks. A stage that has to wait returns
///   [`StageOutcome::Pending`] and is polled again on a later call.
/// - `reset` restores the state the stage had right after construction,
///   keeping configuration supplied to its constructor.
/// - Stages never reach into another stage's state. Data a stage needs
///   across polls lives in the stage itself.
///
/// # Example
///
/// ```rust
/// use scoro::core::{Stage, StageOutcome};
///
/// /// Completes on the third poll of each activation.
/// struct Third {
///     seen: u32,
/// }
///
/// impl Stage for Third {
///     fn step(&mut self) -> StageOutcome {
///         self.seen += 1;
///         StageOutcome::from_ready(self.seen >= 3)
///     }
///
///     fn reset(&mut self) {
///         self.seen = 0;
///     }
/// }
///
/// let mut stage = Third { seen: 0 };
/// assert_eq!(stage.step(), StageOutcome::Pending);
/// assert_eq!(stage.step(), StageOutcome::Pending);
/// assert_eq!(stage.step(), StageOutcome::Complete);
/// ```
pub trait Stage {
    /// Advance this stage by one poll.
    fn step(&mut self) -> StageOutcome;

    /// Restore construction-time state.
    fn reset(&mut self);

    /// Name used in logs and snapshots.
    ///
    /// Defaults to the Rust type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Suggested delay before the next poll, if the stage has an opinion.
    ///
    /// Drivers are free to ignore it. Default implementation returns `None`.
    fn poll_hint(&self) -> Option<Duration> {
        None
    }
}

impl<S: Stage + ?Sized> Stage for Box<S> {
    fn step(&mut self) -> StageOutcome {
        (**self).step()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn poll_hint(&self) -> Option<Duration> {
        (**self).poll_hint()
    }
}
