//! Chart rendering.
use crate::config::{PlotConfig, SeriesSpec};
use anyhow::{anyhow, Result};
use log::info;
use navtrace_core::load_metrics;
use plotters::prelude::*;
use std::{error::Error, fs::create_dir_all, path::PathBuf};

const CHART_SIZE: (u32, u32) = (960, 640);

/// Renders the comparison chart of `series` and saves it as
/// `<out_root>/<mode>/<metric>_graph/<run_id>.png`, returning the path.
///
/// Every series is loaded before anything is drawn or any directory is
/// created, so a missing or malformed CSV aborts the run without leaving a
/// partial chart behind.
pub fn render(config: &PlotConfig, series: &[SeriesSpec], run_id: &str) -> Result<PathBuf> {
    let mut loaded = Vec::with_capacity(series.len());
    for spec in series {
        let records = load_metrics(&spec.path)?;
        let points: Vec<(f64, f64)> = records
            .iter()
            .map(|r| (r.time, config.metric.value(r)))
            .collect();
        loaded.push((spec, points));
    }

    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for (_, points) in &loaded {
        for (_, y) in points {
            y_min = y_min.min(*y);
            y_max = y_max.max(*y);
        }
    }
    if y_min > y_max {
        y_min = 0.0;
        y_max = 1.0;
    } else if y_min == y_max {
        y_max = y_min + 1.0;
    }

    let out_dir = config.out_dir();
    create_dir_all(&out_dir)?;
    let out_path = out_dir.join(format!("{}.png", run_id));

    draw(config, &loaded, &out_path, y_min, y_max)
        .map_err(|e| anyhow!("failed to render chart: {}", e))?;
    info!(
        "Saved {} chart {:?}",
        config.metric.display_name(),
        out_path
    );
    Ok(out_path)
}

fn draw(
    config: &PlotConfig,
    loaded: &[(&SeriesSpec, Vec<(f64, f64)>)],
    out_path: &PathBuf,
    y_min: f64,
    y_max: f64,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(0f64..config.x_max, y_min..y_max)?;

    // Plain tick labels on both axes, no scientific notation.
    chart
        .configure_mesh()
        .x_desc("Training Steps")
        .y_desc(config.metric.display_name())
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{}", v))
        .draw()?;

    for (spec, points) in loaded {
        let color = spec.color.rgb();
        chart
            .draw_series(LineSeries::new(points.iter().cloned(), &color))?
            .label(spec.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
