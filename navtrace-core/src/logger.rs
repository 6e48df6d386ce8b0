//! Line-oriented token logs.
//!
//! A [`TokenWriter`] accumulates tokens on the current line and flushes one
//! line per call to [`TokenWriter::end_line`]. Tokens within a line are
//! comma-separated, so a row of pixel values written token-by-token can later
//! be recombined positionally with the rows of a parallel log.
use anyhow::Result;
use log::info;
use std::{
    fmt::Display,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// A directory holding a set of token logs.
#[derive(Debug, Clone)]
pub struct LogDir {
    root: PathBuf,
}

impl LogDir {
    /// Opens a log directory, creating it recursively if absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a writer appending lines to `<dir>/<name>.csv`.
    pub fn writer(&self, name: &str) -> Result<TokenWriter> {
        let path = self.root.join(format!("{}.csv", name));
        TokenWriter::create(path)
    }
}

/// Writes comma-separated tokens, one line per [`end_line`](Self::end_line).
pub struct TokenWriter {
    file: BufWriter<File>,
    line: Vec<String>,
    lines_written: usize,
}

impl TokenWriter {
    /// Creates (truncates) the file at `path`.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = BufWriter::new(File::create(&path)?);
        info!("Opened token log {:?}", path);
        Ok(Self {
            file,
            line: Vec::new(),
            lines_written: 0,
        })
    }

    /// Appends one token to the current line.
    pub fn push(&mut self, token: impl Display) {
        self.line.push(format!("{}", token));
    }

    /// Flushes the current line.
    pub fn end_line(&mut self) -> Result<()> {
        writeln!(self.file, "{}", self.line.join(","))?;
        self.line.clear();
        self.lines_written += 1;
        Ok(())
    }

    /// Number of lines flushed so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
}

impl Drop for TokenWriter {
    fn drop(&mut self) {
        // Tokens of an unfinished line are dropped, not flushed as a line.
        let _ = self.file.flush();
    }
}

/// The four parallel logs fed by the pixel classifier.
///
/// Invariant: the red, green, blue and mask logs always hold the same number
/// of lines with the same number of tokens per line, because every image row
/// appends exactly one line to each of them.
pub struct ChannelLogs {
    /// Red channel values.
    pub red: TokenWriter,
    /// Green channel values.
    pub green: TokenWriter,
    /// Blue channel values.
    pub blue: TokenWriter,
    /// Classification digits.
    pub mask: TokenWriter,
}

impl ChannelLogs {
    /// Opens the four logs under `dir` as `red.csv`, `green.csv`, `blue.csv`
    /// and `mask.csv`.
    pub fn open(dir: &LogDir) -> Result<Self> {
        Ok(Self {
            red: dir.writer("red")?,
            green: dir.writer("green")?,
            blue: dir.writer("blue")?,
            mask: dir.writer("mask")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;
    use tempdir::TempDir;

    #[test]
    fn test_token_writer_lines() -> Result<()> {
        let dir = TempDir::new("token_writer")?;
        let logs = LogDir::new(dir.path().join("check"))?;
        {
            let mut w = logs.writer("red")?;
            w.push(255);
            w.push(0);
            w.push(100);
            w.end_line()?;
            w.push(1);
            w.end_line()?;
            assert_eq!(w.lines_written(), 2);
        }
        let text = read_to_string(logs.path().join("red.csv"))?;
        assert_eq!(text, "255,0,100\n1\n");
        Ok(())
    }

    #[test]
    fn test_log_dir_created_recursively() -> Result<()> {
        let dir = TempDir::new("log_dir")?;
        let nested = dir.path().join("a").join("b");
        let logs = LogDir::new(&nested)?;
        assert!(logs.path().exists());
        Ok(())
    }
}
