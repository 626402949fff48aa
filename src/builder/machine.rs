//! Builder for machines whose stage list is assembled at runtime.

use crate::builder::error::BuildError;
use crate::core::{Stage, StageList, StageOutcome};
use crate::machine::{Machine, Nested};
use std::fmt;
use std::time::Duration;

/// Non-empty list of boxed stages.
///
/// Trades a pointer indirection per poll for a stage list that can be
/// assembled from configuration or across module boundaries.
pub struct DynStages {
    stages: Vec<Box<dyn Stage>>,
}

impl DynStages {
    /// Wrap a vector of stages. Fails when the vector is empty.
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Result<Self, BuildError> {
        if stages.is_empty() {
            return Err(BuildError::NoStages);
        }
        Ok(Self { stages })
    }
}

impl fmt::Debug for DynStages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.stages.iter().map(|s| s.name()))
            .finish()
    }
}

impl StageList for DynStages {
    fn len(&self) -> usize {
        self.stages.len()
    }

    fn step_at(&mut self, index: usize) -> Option<StageOutcome> {
        self.stages.get_mut(index).map(|stage| stage.step())
    }

    fn reset_all(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
    }

    fn name_at(&self, index: usize) -> Option<&str> {
        self.stages.get(index).map(|stage| stage.name())
    }

    fn poll_hint_at(&self, index: usize) -> Option<Duration> {
        self.stages.get(index).and_then(|stage| stage.poll_hint())
    }
}

/// Builder for constructing runtime-composed machines with a fluent API.
#[derive(Default)]
pub struct MachineBuilder {
    stages: Vec<Box<dyn Stage>>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage.
    pub fn stage<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Append an already boxed stage.
    pub fn boxed(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append several boxed stages at once.
    pub fn stages<I>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Stage>>,
    {
        self.stages.extend(stages);
        self
    }

    /// Append a whole machine as a single nested stage.
    pub fn nested<L: StageList + 'static>(self, name: &'static str, machine: Machine<L>) -> Self {
        self.stage(Nested::named(name, machine))
    }

    /// Build the machine.
    /// Returns an error if no stages were added.
    pub fn build(self) -> Result<Machine<DynStages>, BuildError> {
        Ok(Machine::new(DynStages::new(self.stages)?))
    }
}
