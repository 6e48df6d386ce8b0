//! Multi-panel preview of an observation bundle.
use crate::config::DepthSensorConfig;
use anyhow::Result;
use image::{ImageBuffer, Rgb, RgbImage};
use log::info;
use navtrace_core::{DepthFrame, ObsBundle, RgbFrame, SemanticFrame};
use std::{fs::create_dir_all, path::Path};

const PANEL_GAP: u32 = 8;

// Forty distinct colors used to render instance labels (d3 category20 +
// category20b).
const LABEL_COLORS: [[u8; 3]; 40] = [
    [0x1f, 0x77, 0xb4],
    [0xae, 0xc7, 0xe8],
    [0xff, 0x7f, 0x0e],
    [0xff, 0xbb, 0x78],
    [0x2c, 0xa0, 0x2c],
    [0x98, 0xdf, 0x8a],
    [0xd6, 0x27, 0x28],
    [0xff, 0x98, 0x96],
    [0x94, 0x67, 0xbd],
    [0xc5, 0xb0, 0xd5],
    [0x8c, 0x56, 0x4b],
    [0xc4, 0x9c, 0x94],
    [0xe3, 0x77, 0xc2],
    [0xf7, 0xb6, 0xd2],
    [0x7f, 0x7f, 0x7f],
    [0xc7, 0xc7, 0xc7],
    [0xbc, 0xbd, 0x22],
    [0xdb, 0xdb, 0x8d],
    [0x17, 0xbe, 0xcf],
    [0x9e, 0xda, 0xe5],
    [0x39, 0x3b, 0x79],
    [0x52, 0x54, 0xa3],
    [0x6b, 0x6e, 0xcf],
    [0x9c, 0x9e, 0xde],
    [0x63, 0x79, 0x39],
    [0x8c, 0xa2, 0x52],
    [0xb5, 0xcf, 0x6b],
    [0xce, 0xdb, 0x9c],
    [0x8c, 0x6d, 0x31],
    [0xbd, 0x9e, 0x39],
    [0xe7, 0xba, 0x52],
    [0xe7, 0xcb, 0x94],
    [0x84, 0x3c, 0x39],
    [0xad, 0x49, 0x4a],
    [0xd6, 0x61, 0x6b],
    [0xe7, 0x96, 0x9c],
    [0x7b, 0x41, 0x73],
    [0xa5, 0x51, 0x94],
    [0xce, 0x6d, 0xbd],
    [0xde, 0x9e, 0xd6],
];

fn rgb_panel(frame: &RgbFrame) -> RgbImage {
    let (rows, cols) = (frame.rows(), frame.cols());
    ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
        let (r, g, b) = frame.pixel(y as usize, x as usize);
        Rgb([r, g, b])
    })
}

fn semantic_panel(frame: &SemanticFrame) -> RgbImage {
    let shape = frame.as_array().shape();
    let (rows, cols) = (shape[0], shape[1]);
    ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
        let label = frame.as_array()[[y as usize, x as usize]];
        Rgb(LABEL_COLORS[(label % 40) as usize])
    })
}

fn depth_panel(frame: &DepthFrame, depth: &DepthSensorConfig) -> RgbImage {
    let norm = frame.normalized(depth.min_depth, depth.max_depth);
    let shape = norm.shape();
    let (rows, cols) = (shape[0], shape[1]);
    ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
        let v = (norm[[y as usize, x as usize]] / 10.0 * 255.0) as u8;
        Rgb([v, v, v])
    })
}

/// Renders the available panels (rgb, semantic, depth) side by side into one
/// PNG at `path`, creating parent directories on demand.
pub fn render_panels(bundle: &ObsBundle, depth: &DepthSensorConfig, path: &Path) -> Result<()> {
    let mut panels = vec![rgb_panel(&bundle.rgb)];
    if let Some(semantic) = &bundle.semantic {
        panels.push(semantic_panel(semantic));
    }
    if let Some(depth_frame) = &bundle.depth {
        panels.push(depth_panel(depth_frame, depth));
    }

    let height = panels.iter().map(|p| p.height()).max().unwrap_or(0);
    let width = panels.iter().map(|p| p.width()).sum::<u32>()
        + PANEL_GAP * (panels.len() as u32 - 1);
    let mut canvas: RgbImage = ImageBuffer::from_pixel(width, height, Rgb([255, 255, 255]));

    let mut x0 = 0u32;
    for panel in &panels {
        for (x, y, px) in panel.enumerate_pixels() {
            canvas.put_pixel(x0 + x, y, *px);
        }
        x0 += panel.width() + PANEL_GAP;
    }

    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    canvas.save(path)?;
    info!("Saved observation figure {:?}", path);
    Ok(())
}
