#![warn(missing_docs)]
//! Core types shared by the navtrace utilities.
//!
//! This crate holds the pieces that do not depend on a simulator or on a
//! plotting backend: observation frames ([`RgbFrame`], [`DepthFrame`],
//! [`SemanticFrame`]), the per-pixel classifier ([`classify`],
//! [`dump_channels`]), line-oriented channel logs ([`LogDir`],
//! [`ChannelLogs`]) and the per-episode metrics records read and written as
//! CSV ([`MetricsRecord`]).
pub mod error;

mod classify;
mod frame;
mod logger;
mod metrics;

pub use classify::{classify, dump_channels, PixelClass};
pub use frame::{DepthFrame, ObsBundle, RgbFrame, SemanticFrame};
pub use logger::{ChannelLogs, LogDir, TokenWriter};
pub use metrics::{load_metrics, run_stamp, MetricsRecord, MetricsWriter};
