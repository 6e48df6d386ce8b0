//! Observation frames produced by a simulator step.
use crate::error::NavtraceError;
use anyhow::Result;
use ndarray::{Array2, Array3};

/// An RGB observation of shape `(rows, cols, 3)`.
///
/// Channel intensities are 8-bit values. The frame is addressable by
/// `(row, col)` and yields an `(r, g, b)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbFrame {
    data: Array3<u8>,
}

impl RgbFrame {
    /// Wraps a raw buffer, checking that the channel axis has length 3.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        if data.shape()[2] != 3 {
            return Err(NavtraceError::FrameShape(format!(
                "expected 3 channels, got shape {:?}",
                data.shape()
            ))
            .into());
        }
        Ok(Self { data })
    }

    /// Builds a frame from a flat row-major `rows * cols * 3` buffer.
    pub fn from_raw(rows: usize, cols: usize, buf: Vec<u8>) -> Result<Self> {
        let data = Array3::from_shape_vec((rows, cols, 3), buf)
            .map_err(|e| NavtraceError::FrameShape(format!("{}", e)))?;
        Self::new(data)
    }

    /// Number of image rows.
    pub fn rows(&self) -> usize {
        self.data.shape()[0]
    }

    /// Number of image columns.
    pub fn cols(&self) -> usize {
        self.data.shape()[1]
    }

    /// Channel triple at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> (u8, u8, u8) {
        (
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        )
    }

    /// The underlying buffer.
    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }
}

/// A per-pixel instance label image.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticFrame {
    data: Array2<u32>,
}

impl SemanticFrame {
    /// Wraps a label image.
    pub fn new(data: Array2<u32>) -> Self {
        Self { data }
    }

    /// The underlying labels.
    pub fn as_array(&self) -> &Array2<u32> {
        &self.data
    }
}

/// A per-pixel depth image in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthFrame {
    data: Array2<f32>,
}

impl DepthFrame {
    /// Wraps a depth image.
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    /// The raw depth values.
    pub fn as_array(&self) -> &Array2<f32> {
        &self.data
    }

    /// Depth rescaled to `[0, 1]` over the sensor range `[min_depth, max_depth]`.
    pub fn normalized(&self, min_depth: f32, max_depth: f32) -> Array2<f32> {
        self.data.mapv(|d| (d - min_depth) / (max_depth - min_depth))
    }
}

/// The observation bundle emitted by one simulator step.
///
/// RGB is always present; semantic and depth images depend on the configured
/// sensor set. The bundle is transient, only derived artifacts are persisted.
#[derive(Debug, Clone)]
pub struct ObsBundle {
    /// RGB observation.
    pub rgb: RgbFrame,
    /// Instance labels, if the semantic sensor is active.
    pub semantic: Option<SemanticFrame>,
    /// Depth image, if the depth sensor is active.
    pub depth: Option<DepthFrame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_frame_rejects_bad_channel_axis() {
        let data = Array3::<u8>::zeros((4, 4, 4));
        assert!(RgbFrame::new(data).is_err());
    }

    #[test]
    fn test_rgb_frame_pixel_access() {
        let mut data = Array3::<u8>::zeros((2, 3, 3));
        data[[1, 2, 0]] = 255;
        data[[1, 2, 2]] = 7;
        let frame = RgbFrame::new(data).unwrap();
        assert_eq!(frame.rows(), 2);
        assert_eq!(frame.cols(), 3);
        assert_eq!(frame.pixel(1, 2), (255, 0, 7));
    }

    #[test]
    fn test_depth_normalization() {
        let data = Array2::from_shape_vec((1, 2), vec![0.0f32, 5.0]).unwrap();
        let depth = DepthFrame::new(data);
        let norm = depth.normalized(0.0, 5.0);
        assert_eq!(norm[[0, 0]], 0.0);
        assert_eq!(norm[[0, 1]], 1.0);
    }
}
