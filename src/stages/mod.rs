//! Stock stages.
//!
//! Small, general-purpose implementations of the [`Stage`](crate::core::Stage)
//! contract:
//! - `Action` runs a side effect once per activation and completes
//! - `WaitUntil` stays pending until a predicate holds
//! - `Delay` stays pending until a fixed duration has elapsed on a clock
//! - `Hinted` completes immediately but advertises a poll delay

mod action;
mod delay;
mod wait;

pub use action::{Action, Hinted};
pub use delay::Delay;
pub use wait::WaitUntil;
