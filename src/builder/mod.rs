//! Builder API for runtime-composed machines.
//!
//! Tuple-backed machines are fixed at compile time. When the stage list has
//! to be assembled at runtime, this module provides a fluent builder over a
//! boxed stage list, plus a macro for stateless one-shot stages.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::{DynStages, MachineBuilder};
