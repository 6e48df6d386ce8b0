//! The simulator trait.
use crate::config::SimConfig;
use anyhow::Result;
use navtrace_core::ObsBundle;
use serde::{Deserialize, Serialize};

/// Handle of a dynamic object instantiated in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discrete agent actions understood by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentAction {
    /// Move one step forward.
    MoveForward,
    /// Turn left in place.
    TurnLeft,
    /// Turn right in place.
    TurnRight,
}

/// Interface of the external embodied simulator.
///
/// Everything behind this trait (physics, sensor rendering, dataset and scene
/// loading, action execution) belongs to the external framework. Every error
/// is fatal for the caller: configuration and stepping failures propagate,
/// there are no retries.
pub trait Simulator {
    /// Builds a simulator instance from a configuration tree.
    fn build(config: &SimConfig) -> Result<Self>
    where
        Self: Sized;

    /// Number of object templates in the physics object library.
    fn object_library_size(&self) -> usize;

    /// Ids of all currently live dynamic objects.
    fn existing_object_ids(&self) -> Vec<ObjectId>;

    /// Instantiates the object template at `library_index`.
    fn add_object(&mut self, library_index: usize) -> Result<ObjectId>;

    /// Moves a live object to `position`.
    fn set_translation(&mut self, id: ObjectId, position: [f32; 3]) -> Result<()>;

    /// Removes a live object from the scene.
    fn remove_object(&mut self, id: ObjectId) -> Result<()>;

    /// Resets the episode and returns the initial observation.
    fn reset(&mut self) -> Result<ObsBundle>;

    /// Executes one agent action and returns the resulting observation.
    fn step(&mut self, action: AgentAction) -> Result<ObsBundle>;

    /// Releases the simulator. Idempotent; called on drop of the owner.
    fn close(&mut self);
}
