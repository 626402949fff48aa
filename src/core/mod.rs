//! Core stage contract and result types.
//!
//! This module contains the pieces every machine is built from:
//! - The `Stage` trait implemented by each unit of work
//! - The two result conventions, `StageOutcome` and `MachineOutcome`
//! - Statically dispatched stage lists via the `StageList` trait

mod list;
mod outcome;
mod stage;

pub use list::StageList;
pub use outcome::{MachineOutcome, StageOutcome};
pub use stage::Stage;
