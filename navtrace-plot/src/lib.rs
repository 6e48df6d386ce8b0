#![warn(missing_docs)]
//! Comparison charts of per-episode metrics.
//!
//! Loads one or more headerless metrics CSV logs and renders one line per
//! series against the training step count, saved as a PNG under
//! `result/<mode>/<metric>_graph/`.
mod chart;
mod config;

pub use chart::render;
pub use config::{Metric, PlotConfig, SeriesColor, SeriesSpec};
