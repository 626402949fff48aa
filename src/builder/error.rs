//! Build errors for runtime-composed machines.

use thiserror::Error;

/// Errors that can occur when building a machine from a runtime stage list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No stages defined. Add at least one stage before .build()")]
    NoStages,
}
