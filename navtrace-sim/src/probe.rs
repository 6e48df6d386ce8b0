//! One-step observation probe.
use crate::{
    base::{AgentAction, Simulator},
    config::SimConfig,
    figure::render_panels,
    scene::{ObjectPlacement, SceneState},
};
use anyhow::Result;
use navtrace_core::{dump_channels, ChannelLogs, LogDir, ObsBundle};
use std::path::Path;

/// Drives one probing pass against a simulator.
///
/// The probe owns the simulator for its whole lifetime and closes it on drop,
/// including when a configuration or stepping error aborts the run.
pub struct ObservationProbe<S: Simulator> {
    config: SimConfig,
    sim: S,
    scene: SceneState,
}

impl<S: Simulator> ObservationProbe<S> {
    /// Builds the simulator from `config` and wraps it in a probe.
    pub fn build(config: SimConfig) -> Result<Self> {
        let sim = S::build(&config)?;
        Ok(Self {
            config,
            sim,
            scene: SceneState::new(),
        })
    }

    /// Resets the episode, respawns the scene objects, steps the agent one
    /// step forward and routes the resulting observation to the channel logs
    /// and, when `figure_path` is given, to a multi-panel preview PNG.
    ///
    /// Any simulator failure aborts the run and propagates.
    pub fn run(
        &mut self,
        placements: &[ObjectPlacement],
        log_dir: &LogDir,
        figure_path: Option<&Path>,
    ) -> Result<ObsBundle> {
        self.sim.reset()?;
        self.scene.respawn(&mut self.sim, placements)?;
        let bundle = self.sim.step(AgentAction::MoveForward)?;

        let mut logs = ChannelLogs::open(log_dir)?;
        dump_channels(&bundle.rgb, &mut logs)?;

        if let Some(path) = figure_path {
            render_panels(&bundle, &self.config.depth, path)?;
        }
        Ok(bundle)
    }

    /// The probe's configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// State of the inserted objects.
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// The underlying simulator.
    pub fn sim(&self) -> &S {
        &self.sim
    }
}

impl<S: Simulator> Drop for ObservationProbe<S> {
    fn drop(&mut self) {
        self.sim.close();
    }
}
