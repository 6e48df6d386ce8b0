//! Scripted simulator used by tests and demos.
use crate::{
    base::{AgentAction, ObjectId, Simulator},
    config::{SensorKind, SimConfig},
};
use anyhow::Result;
use navtrace_core::{
    error::NavtraceError, DepthFrame, ObsBundle, RgbFrame, SemanticFrame,
};
use ndarray::{Array2, Array3};
use std::collections::BTreeMap;

const LIBRARY_SIZE: usize = 10;
const FLOOR: [u8; 3] = [128, 128, 128];
const VOID: [u8; 3] = [10, 10, 10];
const MARKER: [u8; 3] = [230, 20, 20];

/// A deterministic in-process [`Simulator`].
///
/// Renders a synthetic scene instead of calling into an external physics and
/// rendering engine: a gray floor, a black void strip along the bottom rows
/// and one red marker block per inserted object. The same registry always
/// renders the same observation, which makes probe runs reproducible in
/// tests.
pub struct ScriptedSim {
    rows: usize,
    cols: usize,
    with_semantic: bool,
    with_depth: bool,
    objects: BTreeMap<ObjectId, (usize, [f32; 3])>,
    next_id: u64,
    closed: bool,
}

impl ScriptedSim {
    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(NavtraceError::Sim("simulator is closed".into()).into());
        }
        Ok(())
    }

    fn render(&self) -> ObsBundle {
        let (rows, cols) = (self.rows, self.cols);
        let mut rgb = Array3::<u8>::zeros((rows, cols, 3));
        let mut labels = Array2::<u32>::zeros((rows, cols));

        for i in 0..rows {
            for j in 0..cols {
                let color = if i >= rows - rows / 8 { VOID } else { FLOOR };
                for c in 0..3 {
                    rgb[[i, j, c]] = color[c];
                }
            }
        }

        // One marker block per live object, left to right in id order.
        for (k, (id, _)) in self.objects.iter().enumerate() {
            let (r0, r1) = (10.min(rows), 30.min(rows));
            let (c0, c1) = ((10 + 20 * k).min(cols), (26 + 20 * k).min(cols));
            for i in r0..r1 {
                for j in c0..c1 {
                    for c in 0..3 {
                        rgb[[i, j, c]] = MARKER[c];
                    }
                    labels[[i, j]] = id.0 as u32 + 1;
                }
            }
        }

        let rgb = RgbFrame::new(rgb).expect("channel axis is 3 by construction");
        let semantic = if self.with_semantic {
            Some(SemanticFrame::new(labels))
        } else {
            None
        };
        let depth = if self.with_depth {
            Some(DepthFrame::new(Array2::from_elem((rows, cols), 2.5f32)))
        } else {
            None
        };
        ObsBundle {
            rgb,
            semantic,
            depth,
        }
    }
}

impl Simulator for ScriptedSim {
    fn build(config: &SimConfig) -> Result<Self> {
        if !config.sensors.contains(&SensorKind::RgbSensor) {
            return Err(NavtraceError::Sim("an RGB sensor is required".into()).into());
        }
        let (rows, cols) = config.semantic_resolution;
        Ok(Self {
            rows,
            cols,
            with_semantic: config.sensors.contains(&SensorKind::SemanticSensor),
            with_depth: config.sensors.contains(&SensorKind::DepthSensor),
            objects: BTreeMap::new(),
            next_id: 0,
            closed: false,
        })
    }

    fn object_library_size(&self) -> usize {
        LIBRARY_SIZE
    }

    fn existing_object_ids(&self) -> Vec<ObjectId> {
        self.objects.keys().cloned().collect()
    }

    fn add_object(&mut self, library_index: usize) -> Result<ObjectId> {
        self.ensure_open()?;
        if library_index >= LIBRARY_SIZE {
            return Err(NavtraceError::Sim(format!(
                "object template {} out of range",
                library_index
            ))
            .into());
        }
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, (library_index, [0.0; 3]));
        Ok(id)
    }

    fn set_translation(&mut self, id: ObjectId, position: [f32; 3]) -> Result<()> {
        self.ensure_open()?;
        match self.objects.get_mut(&id) {
            Some(entry) => {
                entry.1 = position;
                Ok(())
            }
            None => Err(NavtraceError::Sim(format!("no such object: {}", id)).into()),
        }
    }

    fn remove_object(&mut self, id: ObjectId) -> Result<()> {
        self.ensure_open()?;
        match self.objects.remove(&id) {
            Some(_) => Ok(()),
            None => Err(NavtraceError::Sim(format!("no such object: {}", id)).into()),
        }
    }

    fn reset(&mut self) -> Result<ObsBundle> {
        self.ensure_open()?;
        Ok(self.render())
    }

    fn step(&mut self, _action: AgentAction) -> Result<ObsBundle> {
        self.ensure_open()?;
        Ok(self.render())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimConfig {
        SimConfig::default().semantic_resolution((64, 64))
    }

    #[test]
    fn test_step_after_close_fails() {
        let mut sim = ScriptedSim::build(&config()).unwrap();
        sim.close();
        assert!(sim.step(AgentAction::MoveForward).is_err());
    }

    #[test]
    fn test_rgb_sensor_required() {
        let config = SimConfig::default().sensors(vec![SensorKind::DepthSensor]);
        assert!(ScriptedSim::build(&config).is_err());
    }

    #[test]
    fn test_marker_rendered_for_inserted_object() -> Result<()> {
        let mut sim = ScriptedSim::build(&config())?;
        let id = sim.add_object(0)?;
        sim.set_translation(id, [8.8, 3.8, 7.7])?;
        let bundle = sim.step(AgentAction::MoveForward)?;
        assert_eq!(bundle.rgb.pixel(15, 15), (230, 20, 20));
        assert_eq!(bundle.semantic.unwrap().as_array()[[15, 15]], id.0 as u32 + 1);
        Ok(())
    }

    #[test]
    fn test_library_bound_checked() {
        let mut sim = ScriptedSim::build(&config()).unwrap();
        assert!(sim.add_object(LIBRARY_SIZE).is_err());
    }
}
