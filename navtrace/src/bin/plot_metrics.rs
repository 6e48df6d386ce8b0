//! Plots a metric column of one or more runs against training steps.
use anyhow::{anyhow, Result};
use clap::Parser;
use navtrace_plot::{render, Metric, PlotConfig, SeriesColor, SeriesSpec};
use std::path::PathBuf;

/// Default color cycle when no colors are given.
const COLOR_CYCLE: [SeriesColor; 4] = [
    SeriesColor::Blue,
    SeriesColor::Red,
    SeriesColor::Green,
    SeriesColor::Black,
];

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Run identifiers to compare (chart is named after the last one)
    #[arg(required = true)]
    runs: Vec<String>,

    /// Legend label per run, in order; defaults to the run identifier
    #[arg(short, long)]
    labels: Vec<String>,

    /// Line color per run, in order (blue, red, green, ...)
    #[arg(short, long)]
    colors: Vec<String>,

    /// Split the runs were logged under
    #[arg(short, long, default_value = "val")]
    mode: String,

    /// Metric plotted on the y axis
    #[arg(long, default_value = "path_length")]
    metric: String,

    /// Root of the log tree
    #[arg(long, default_value = "log")]
    log_root: PathBuf,

    /// Root of the result tree
    #[arg(long, default_value = "result")]
    out_root: PathBuf,

    /// Upper bound of the x axis in training steps
    #[arg(long, default_value_t = 25_000_000.0)]
    x_max: f64,
}

fn parse_metric(s: &str) -> Result<Metric> {
    match s {
        "path_length" => Ok(Metric::PathLength),
        "exp_area" => Ok(Metric::ExpArea),
        "episode_length" => Ok(Metric::EpisodeLength),
        _ => Err(anyhow!("unknown metric: {}", s)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let metric = parse_metric(&args.metric)?;

    let mut series = Vec::with_capacity(args.runs.len());
    for (i, run) in args.runs.iter().enumerate() {
        let path = args
            .log_root
            .join(run)
            .join(&args.mode)
            .join("metrics.csv");
        let label = args.labels.get(i).cloned().unwrap_or_else(|| run.clone());
        let color = match args.colors.get(i) {
            Some(name) => name.parse()?,
            None => COLOR_CYCLE[i % COLOR_CYCLE.len()],
        };
        series.push(SeriesSpec::new(path, label, color));
    }

    let config = PlotConfig::default()
        .mode(args.mode)
        .metric(metric)
        .x_max(args.x_max)
        .out_root(args.out_root);
    let run_id = args.runs.last().expect("at least one run is required");
    let out = render(&config, &series, run_id)?;

    println!("Saved chart to {:?}", out);
    println!("Showing {} graph is completed.", metric.display_name());
    Ok(())
}
