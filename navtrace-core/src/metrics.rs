//! Per-episode metrics records.
//!
//! One experiment run appends one headerless CSV row per logged timestep to
//! `metrics.csv`. The column order is fixed and shared by the writer (the
//! training loop) and the reader (the plotter).
use crate::error::NavtraceError;
use anyhow::Result;
use chrono::Local;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::{create_dir_all, OpenOptions},
    path::{Path, PathBuf},
};

/// One row of a run's metrics log.
///
/// Field order matches the CSV column order: time, picture id, configuration
/// id, episode length, explored area, path length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Training step count at which the row was logged.
    pub time: f64,
    /// Picture id.
    pub picture: i64,
    /// Configuration id.
    pub ci: i64,
    /// Episode length.
    pub episode_length: f64,
    /// Explored area.
    pub exp_area: f64,
    /// Path length.
    pub path_length: f64,
}

/// Loads every record of a headerless metrics CSV.
///
/// A missing or malformed file is a [`NavtraceError::DataLoad`]; the caller
/// is expected to abort, there is no partial result.
pub fn load_metrics(path: impl AsRef<Path>) -> Result<Vec<MetricsRecord>> {
    let path = path.as_ref();
    let map_err = |source: csv::Error| NavtraceError::DataLoad {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(map_err)?;
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row.map_err(map_err)?);
    }
    Ok(records)
}

/// Returns the run identifier for the current wall time, in the
/// `"yy-mm-dd HH-MM-SS"` form used for log and result directories.
pub fn run_stamp() -> String {
    Local::now().format("%y-%m-%d %H-%M-%S").to_string()
}

/// Appends [`MetricsRecord`]s to a run's `metrics.csv`.
pub struct MetricsWriter {
    wtr: csv::Writer<std::fs::File>,
    path: PathBuf,
}

impl MetricsWriter {
    /// Opens `<log_root>/<run_id>/<mode>/metrics.csv` in append mode,
    /// creating the directories on demand.
    pub fn open(log_root: impl AsRef<Path>, run_id: &str, mode: &str) -> Result<Self> {
        let dir = log_root.as_ref().join(run_id).join(mode);
        create_dir_all(&dir)?;
        let path = dir.join("metrics.csv");
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        info!("Opened metrics log {:?}", path);
        Ok(Self { wtr, path })
    }

    /// Appends one record.
    pub fn append(&mut self, record: &MetricsRecord) -> Result<()> {
        self.wtr.serialize(record)?;
        self.wtr.flush()?;
        Ok(())
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    fn record(time: f64, path_length: f64) -> MetricsRecord {
        MetricsRecord {
            time,
            picture: 3,
            ci: 1,
            episode_length: 72.0,
            exp_area: 0.41,
            path_length,
        }
    }

    #[test]
    fn test_append_then_load_round_trip() -> Result<()> {
        let dir = TempDir::new("metrics")?;
        let mut wtr = MetricsWriter::open(dir.path(), "23-08-07 19-14-18", "val")?;
        wtr.append(&record(0.0, 10.0))?;
        wtr.append(&record(100.0, 20.0))?;
        let path = wtr.path().to_path_buf();
        drop(wtr);

        let records = load_metrics(&path)?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], record(0.0, 10.0));
        assert_eq!(records[1].path_length, 20.0);
        Ok(())
    }

    #[test]
    fn test_missing_file_fails() {
        let err = load_metrics("no/such/metrics.csv").unwrap_err();
        assert!(format!("{}", err).contains("failed to load metrics"));
    }

    #[test]
    fn test_malformed_row_fails() -> Result<()> {
        let dir = TempDir::new("metrics_bad")?;
        let path = dir.path().join("metrics.csv");
        std::fs::write(&path, "0.0,not-a-number,1,72.0,0.41,10.0\n")?;
        assert!(load_metrics(&path).is_err());
        Ok(())
    }
}
