#![warn(missing_docs)]
//! Simulator seam and scene probing.
//!
//! The physics, rendering and dataset machinery of the embodied simulator is
//! an external collaborator and stays behind the [`Simulator`] trait. This
//! crate owns what sits on top of it: the configuration tree handed to the
//! simulator ([`SimConfig`]), explicit scene state ([`SceneState`]), the
//! one-step observation probe ([`ObservationProbe`]) and a deterministic
//! scripted simulator ([`ScriptedSim`]) used by tests and demos.
mod base;
mod config;
mod figure;
mod probe;
mod scene;
mod scripted;

pub use base::{AgentAction, ObjectId, Simulator};
pub use config::{DepthSensorConfig, Measurement, SensorKind, SimConfig};
pub use figure::render_panels;
pub use probe::ObservationProbe;
pub use scene::{ObjectPlacement, SceneState};
pub use scripted::ScriptedSim;
