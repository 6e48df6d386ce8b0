//! Explicit state of the objects inserted into the scene.
use crate::base::{ObjectId, Simulator};
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

/// One object to instantiate: a template index into the physics object
/// library and a world position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectPlacement {
    /// Index of the object template in the physics object library.
    pub library_index: usize,
    /// World translation of the instantiated object.
    pub position: [f32; 3],
}

impl ObjectPlacement {
    /// Constructs a placement record.
    pub fn new(library_index: usize, position: [f32; 3]) -> Self {
        Self {
            library_index,
            position,
        }
    }
}

/// Owns the current generation of inserted objects.
///
/// [`respawn`](Self::respawn) removes every live dynamic object before
/// instantiating the next placement list, so at most one generation of
/// inserted objects is live at any time.
#[derive(Debug, Default)]
pub struct SceneState {
    live: Vec<ObjectId>,
}

impl SceneState {
    /// Constructs an empty scene state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the current generation.
    pub fn live(&self) -> &[ObjectId] {
        &self.live
    }

    /// Removes every existing dynamic object from the simulator.
    pub fn clear<S: Simulator>(&mut self, sim: &mut S) -> Result<()> {
        for old_id in sim.existing_object_ids() {
            info!("remove: {}", old_id);
            sim.remove_object(old_id)?;
        }
        self.live.clear();
        Ok(())
    }

    /// Replaces the live generation with the given placements.
    pub fn respawn<S: Simulator>(
        &mut self,
        sim: &mut S,
        placements: &[ObjectPlacement],
    ) -> Result<()> {
        info!("object_lib_size: {}", sim.object_library_size());
        self.clear(sim)?;
        for p in placements {
            let id = sim.add_object(p.library_index)?;
            sim.set_translation(id, p.position)?;
            info!(
                "added object: {} of type {} at: {:?}",
                id, p.library_index, p.position
            );
            self.live.push(id);
        }
        Ok(())
    }
}
