#![warn(missing_docs)]
//! Navtrace bundles the analysis utilities of an object navigation research
//! workflow. It consists of crates below:
//!
//! * [navtrace-core](navtrace_core) holds observation frames, the per-pixel
//!   classifier and its channel logs, and the per-episode metrics records.
//! * [navtrace-sim](navtrace_sim) holds the simulator seam: the configuration
//!   tree, explicit scene state and the one-step observation probe.
//! * [navtrace-plot](navtrace_plot) renders comparison charts of metrics
//!   logs.
//!
//! The crate ships two programs: `scene_probe`, which places objects in a
//! scene, steps the agent once and dumps per-pixel channel values and a
//! classification mask to four parallel logs, and `plot_metrics`, which
//! plots a metric column of one or more runs against training steps.
pub use navtrace_core;
pub use navtrace_plot;
pub use navtrace_sim;
