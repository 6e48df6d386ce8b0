//! Errors in the library.
use std::path::PathBuf;
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum NavtraceError {
    /// A metrics CSV file was missing or malformed.
    #[error("failed to load metrics from {path}: {source}")]
    DataLoad {
        /// Path of the file that could not be loaded.
        path: PathBuf,
        /// Underlying CSV or IO error.
        #[source]
        source: csv::Error,
    },

    /// An image buffer had an unexpected shape.
    #[error("frame shape error: {0}")]
    FrameShape(String),

    /// A series color name was not recognized.
    #[error("unknown color name: {0}")]
    UnknownColor(String),

    /// The simulator reported a fault. Fatal for the caller.
    #[error("simulator error: {0}")]
    Sim(String),
}
