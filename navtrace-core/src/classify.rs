//! Per-pixel classification of RGB observations.
use crate::{frame::RgbFrame, logger::ChannelLogs};
use anyhow::Result;

/// Class of one pixel, derived from its channel triple alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// Neither a marker nor void. Includes all threshold-boundary pixels.
    Other,
    /// A red object marker: `r > 200 && g < 50 && b < 50`.
    RedMarker,
    /// Black or unobserved region: `r < 50 && g < 50 && b < 50`.
    Void,
}

impl PixelClass {
    /// Digit written to the mask log.
    pub fn digit(&self) -> u8 {
        match self {
            PixelClass::Other => 0,
            PixelClass::RedMarker => 1,
            PixelClass::Void => 2,
        }
    }
}

/// Classifies one pixel. First match wins; comparisons are strict, so channel
/// values exactly at the thresholds (200, 50) always fall into
/// [`PixelClass::Other`].
pub fn classify(r: u8, g: u8, b: u8) -> PixelClass {
    if r > 200 && g < 50 && b < 50 {
        PixelClass::RedMarker
    } else if r < 50 && g < 50 && b < 50 {
        PixelClass::Void
    } else {
        PixelClass::Other
    }
}

/// Streams a frame into the four channel logs in row-major order.
///
/// For each image row, one line goes to each of the red, green and blue logs
/// with that row's channel values, and one line to the mask log with the
/// classification digit of each pixel. The pass is a pure projection of the
/// frame; re-running it on the same frame produces identical log bytes.
pub fn dump_channels(frame: &RgbFrame, logs: &mut ChannelLogs) -> Result<()> {
    for i in 0..frame.rows() {
        for j in 0..frame.cols() {
            let (r, g, b) = frame.pixel(i, j);
            logs.red.push(r);
            logs.green.push(g);
            logs.blue.push(b);
            logs.mask.push(classify(r, g, b).digit());
        }
        logs.red.end_line()?;
        logs.green.end_line()?;
        logs.blue.end_line()?;
        logs.mask.end_line()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogDir;
    use ndarray::Array3;
    use std::fs::read_to_string;
    use tempdir::TempDir;

    #[test]
    fn test_red_marker_class() {
        assert_eq!(classify(201, 49, 49), PixelClass::RedMarker);
        assert_eq!(classify(255, 0, 0), PixelClass::RedMarker);
    }

    #[test]
    fn test_void_class() {
        assert_eq!(classify(49, 49, 49), PixelClass::Void);
        assert_eq!(classify(0, 0, 0), PixelClass::Void);
    }

    #[test]
    fn test_boundary_values_are_other() {
        // Strict comparisons: 200 and 50 never match the first two rules.
        assert_eq!(classify(200, 0, 0), PixelClass::Other);
        assert_eq!(classify(255, 50, 0), PixelClass::Other);
        assert_eq!(classify(255, 0, 50), PixelClass::Other);
        assert_eq!(classify(50, 0, 0), PixelClass::Other);
        assert_eq!(classify(0, 50, 0), PixelClass::Other);
        assert_eq!(classify(100, 100, 100), PixelClass::Other);
    }

    fn sample_frame() -> RgbFrame {
        // One row: red marker, void, gray.
        let buf = vec![255u8, 0, 0, 0, 0, 0, 100, 100, 100];
        RgbFrame::new(Array3::from_shape_vec((1, 3, 3), buf).unwrap()).unwrap()
    }

    fn dump_to(dir: &LogDir, frame: &RgbFrame) -> Result<()> {
        let mut logs = ChannelLogs::open(dir)?;
        dump_channels(frame, &mut logs)
    }

    #[test]
    fn test_dump_channels_row() -> Result<()> {
        let tmp = TempDir::new("dump_channels")?;
        let dir = LogDir::new(tmp.path())?;
        dump_to(&dir, &sample_frame())?;

        assert_eq!(read_to_string(dir.path().join("red.csv"))?, "255,0,100\n");
        assert_eq!(read_to_string(dir.path().join("green.csv"))?, "0,0,100\n");
        assert_eq!(read_to_string(dir.path().join("blue.csv"))?, "0,0,100\n");
        assert_eq!(read_to_string(dir.path().join("mask.csv"))?, "1,2,0\n");
        Ok(())
    }

    #[test]
    fn test_logs_stay_row_synchronized() -> Result<()> {
        let rows = 4;
        let cols = 5;
        let frame =
            RgbFrame::new(Array3::from_elem((rows, cols, 3), 128u8)).unwrap();
        let tmp = TempDir::new("row_sync")?;
        let dir = LogDir::new(tmp.path())?;
        dump_to(&dir, &frame)?;

        for name in &["red", "green", "blue", "mask"] {
            let text = read_to_string(dir.path().join(format!("{}.csv", name)))?;
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), rows, "{} line count", name);
            for line in lines {
                assert_eq!(line.split(',').count(), cols, "{} row length", name);
            }
        }
        Ok(())
    }

    #[test]
    fn test_dump_is_idempotent() -> Result<()> {
        let frame = sample_frame();
        let tmp = TempDir::new("idempotent")?;
        let dir_a = LogDir::new(tmp.path().join("a"))?;
        let dir_b = LogDir::new(tmp.path().join("b"))?;
        dump_to(&dir_a, &frame)?;
        dump_to(&dir_b, &frame)?;
        for name in &["red", "green", "blue", "mask"] {
            let a = read_to_string(dir_a.path().join(format!("{}.csv", name)))?;
            let b = read_to_string(dir_b.path().join(format!("{}.csv", name)))?;
            assert_eq!(a, b);
        }
        Ok(())
    }
}
