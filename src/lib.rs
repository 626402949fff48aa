//! Scoro: a cooperative, step-at-a-time stage sequencer
//!
//! A machine is an ordered list of independently written stages plus a
//! cursor. An external driver polls the machine; each poll runs the active
//! stage and keeps advancing through stages that complete immediately,
//! returning as soon as one is still pending or the list is exhausted.
//!
//! # Core Concepts
//!
//! - **Stage**: a unit of work with private, resettable state via the `Stage` trait
//! - **Outcomes**: `StageOutcome` for a single stage, `MachineOutcome` for a
//!   whole machine; two distinct types that cannot be mixed up
//! - **Machine**: the dispatcher over a statically typed tuple of stages
//! - **Nesting**: `Nested` lets a whole machine run as one stage of another
//!
//! # Example
//!
//! ```rust
//! use scoro::clock::ManualClock;
//! use scoro::core::MachineOutcome;
//! use scoro::stages::{Action, Delay};
//! use scoro::Machine;
//! use std::time::Duration;
//!
//! let clock = ManualClock::default();
//! let inner = Machine::new((Action::new(|| print!("/")), Action::new(|| print!("\\"))));
//!
//! let mut machine = Machine::new((
//!     Delay::new(clock.clone(), Duration::from_millis(50)),
//!     inner.into_nested(),
//!     Action::new(|| println!("complete")),
//! ));
//!
//! assert_eq!(machine.step(), MachineOutcome::Running);
//! clock.advance(Duration::from_millis(50));
//! assert_eq!(machine.step(), MachineOutcome::Finished);
//!
//! machine.reset();
//! assert_eq!(machine.step(), MachineOutcome::Running);
//! ```

pub mod builder;
pub mod clock;
pub mod core;
pub mod driver;
pub mod machine;
pub mod snapshot;
pub mod stages;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use crate::core::{MachineOutcome, Stage, StageList, StageOutcome};
pub use machine::{Machine, Nested};
pub use snapshot::MachineSnapshot;
