//! Configuration of the simulator.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

/// Sensors that can be attached to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensorKind {
    /// RGB camera.
    RgbSensor,
    /// Depth camera.
    DepthSensor,
    /// Instance segmentation camera.
    SemanticSensor,
}

/// Task measurements computed by the simulator per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum Measurement {
    DistanceToCurrGoal,
    DistanceToMultiGoal,
    SubSuccess,
    Success,
    EpisodeLength,
    Mspl,
    PercentageSuccess,
    Ratio,
    Pspl,
    RawMetrics,
    TopDownMap,
}

/// Depth sensor range and normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthSensorConfig {
    /// Near clip of the sensor in meters.
    pub min_depth: f32,
    /// Far clip of the sensor in meters.
    pub max_depth: f32,
    /// If true, the simulator itself rescales depth to `[0, 1]`.
    pub normalize_depth: bool,
}

impl Default for DepthSensorConfig {
    fn default() -> Self {
        Self {
            min_depth: 0.0,
            max_depth: 5.0,
            normalize_depth: false,
        }
    }
}

/// Configuration tree consumed by [`Simulator::build`](crate::Simulator::build).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Sensors attached to the agent.
    pub sensors: Vec<SensorKind>,

    /// Depth sensor parameters.
    pub depth: DepthSensorConfig,

    /// Height of the agent's camera in meters.
    pub agent_height: f32,

    /// Resolution (rows, cols) of the semantic sensor.
    pub semantic_resolution: (usize, usize),

    /// Task measurements to compute.
    pub measurements: Vec<Measurement>,

    /// Path of the episode dataset.
    pub dataset_path: PathBuf,

    /// Path of the physics scene configuration file.
    pub physics_config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sensors: vec![
                SensorKind::RgbSensor,
                SensorKind::DepthSensor,
                SensorKind::SemanticSensor,
            ],
            depth: DepthSensorConfig::default(),
            agent_height: 1.5,
            semantic_resolution: (256, 256),
            measurements: vec![
                Measurement::DistanceToCurrGoal,
                Measurement::DistanceToMultiGoal,
                Measurement::SubSuccess,
                Measurement::Success,
                Measurement::EpisodeLength,
                Measurement::Mspl,
                Measurement::PercentageSuccess,
                Measurement::Ratio,
                Measurement::Pspl,
                Measurement::RawMetrics,
                Measurement::TopDownMap,
            ],
            dataset_path: PathBuf::new(),
            physics_config_path: PathBuf::new(),
        }
    }
}

impl SimConfig {
    /// Sets the sensor set.
    pub fn sensors(mut self, v: Vec<SensorKind>) -> Self {
        self.sensors = v;
        self
    }

    /// Sets the depth sensor parameters.
    pub fn depth(mut self, v: DepthSensorConfig) -> Self {
        self.depth = v;
        self
    }

    /// Sets the agent camera height.
    pub fn agent_height(mut self, v: f32) -> Self {
        self.agent_height = v;
        self
    }

    /// Sets the semantic sensor resolution (rows, cols).
    pub fn semantic_resolution(mut self, v: (usize, usize)) -> Self {
        self.semantic_resolution = v;
        self
    }

    /// Sets the measurement set.
    pub fn measurements(mut self, v: Vec<Measurement>) -> Self {
        self.measurements = v;
        self
    }

    /// Sets the episode dataset path.
    pub fn dataset_path(mut self, v: impl Into<PathBuf>) -> Self {
        self.dataset_path = v.into();
        self
    }

    /// Sets the physics scene configuration file path.
    pub fn physics_config_path(mut self, v: impl Into<PathBuf>) -> Self {
        self.physics_config_path = v.into();
        self
    }

    /// Constructs [`SimConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`SimConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_sim_config() -> Result<()> {
        let config = SimConfig::default()
            .dataset_path("figures/test3.json.gz")
            .physics_config_path("data/default.phys_scene_config.json")
            .agent_height(1.5);

        let dir = TempDir::new("sim_config")?;
        let path = dir.path().join("sim_config.yaml");
        config.save(&path)?;
        let config_ = SimConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_measurement_names() -> Result<()> {
        let yaml = serde_yaml::to_string(&Measurement::DistanceToMultiGoal)?;
        assert!(yaml.contains("DISTANCE_TO_MULTI_GOAL"));
        Ok(())
    }
}
