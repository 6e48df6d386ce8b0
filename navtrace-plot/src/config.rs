//! Configuration of a metrics chart.
use anyhow::Result;
use navtrace_core::{error::NavtraceError, MetricsRecord};
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Line color of one plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum SeriesColor {
    Blue,
    Red,
    Green,
    Black,
    Magenta,
    Cyan,
    Yellow,
}

impl SeriesColor {
    /// The backend color.
    pub fn rgb(&self) -> RGBColor {
        match self {
            SeriesColor::Blue => RGBColor(0, 0, 255),
            SeriesColor::Red => RGBColor(255, 0, 0),
            SeriesColor::Green => RGBColor(0, 128, 0),
            SeriesColor::Black => RGBColor(0, 0, 0),
            SeriesColor::Magenta => RGBColor(255, 0, 255),
            SeriesColor::Cyan => RGBColor(0, 255, 255),
            SeriesColor::Yellow => RGBColor(255, 200, 0),
        }
    }
}

impl FromStr for SeriesColor {
    type Err = NavtraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(SeriesColor::Blue),
            "red" => Ok(SeriesColor::Red),
            "green" => Ok(SeriesColor::Green),
            "black" => Ok(SeriesColor::Black),
            "magenta" => Ok(SeriesColor::Magenta),
            "cyan" => Ok(SeriesColor::Cyan),
            "yellow" => Ok(SeriesColor::Yellow),
            _ => Err(NavtraceError::UnknownColor(s.to_string())),
        }
    }
}

/// One CSV series to draw: where it lives, how it is labeled in the legend
/// and the line color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    /// Path of the run's `metrics.csv`.
    pub path: PathBuf,
    /// Legend label.
    pub label: String,
    /// Line color.
    pub color: SeriesColor,
}

impl SeriesSpec {
    /// Constructs a series spec.
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>, color: SeriesColor) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            color,
        }
    }
}

/// The metric column plotted on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Length of the path walked within an episode.
    PathLength,
    /// Explored area.
    ExpArea,
    /// Episode length in steps.
    EpisodeLength,
}

impl Metric {
    /// Axis label of the metric.
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::PathLength => "Path Length",
            Metric::ExpArea => "Explored Area",
            Metric::EpisodeLength => "Episode Length",
        }
    }

    /// Directory stem under `result/<mode>/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Metric::PathLength => "path_length",
            Metric::ExpArea => "exp_area",
            Metric::EpisodeLength => "episode_length",
        }
    }

    /// Extracts the metric from one record.
    pub fn value(&self, record: &MetricsRecord) -> f64 {
        match self {
            Metric::PathLength => record.path_length,
            Metric::ExpArea => record.exp_area,
            Metric::EpisodeLength => record.episode_length,
        }
    }
}

/// Configuration of [`render`](crate::render).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Split the plotted runs were logged under ("train" or "val").
    pub mode: String,

    /// Metric plotted on the y axis.
    pub metric: Metric,

    /// Upper bound of the x axis in training steps.
    pub x_max: f64,

    /// Root of the result tree.
    pub out_root: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            mode: "val".to_string(),
            metric: Metric::PathLength,
            x_max: 25_000_000.0,
            out_root: PathBuf::from("result"),
        }
    }
}

impl PlotConfig {
    /// Sets the mode.
    pub fn mode(mut self, v: impl Into<String>) -> Self {
        self.mode = v.into();
        self
    }

    /// Sets the plotted metric.
    pub fn metric(mut self, v: Metric) -> Self {
        self.metric = v;
        self
    }

    /// Sets the x axis upper bound.
    pub fn x_max(mut self, v: f64) -> Self {
        self.x_max = v;
        self
    }

    /// Sets the root of the result tree.
    pub fn out_root(mut self, v: impl Into<PathBuf>) -> Self {
        self.out_root = v.into();
        self
    }

    /// Directory the chart is saved under, created on demand by
    /// [`render`](crate::render).
    pub fn out_dir(&self) -> PathBuf {
        self.out_root
            .join(&self.mode)
            .join(format!("{}_graph", self.metric.dir_name()))
    }

    /// Constructs [`PlotConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`PlotConfig`].
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
    fn test_color_from_str() {
        assert_eq!("blue".parse::<SeriesColor>().unwrap(), SeriesColor::Blue);
        assert!("mauve".parse::<SeriesColor>().is_err());
    }

    #[test]
    fn test_out_dir_layout() {
        let config = PlotConfig::default().mode("train");
        assert_eq!(
            config.out_dir(),
            PathBuf::from("result/train/path_length_graph")
        );
    }

    #[test]
    fn test_serde_plot_config() -> Result<()> {
        let config = PlotConfig::default().x_max(1_000_000.0).mode("train");
        let dir = TempDir::new("plot_config")?;
        let path = dir.path().join("plot_config.yaml");
        config.save(&path)?;
        let config_ = PlotConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
