//! Places objects in a scene, steps the agent once and dumps per-pixel
//! channel values and a classification mask to four parallel logs.
use anyhow::Result;
use clap::Parser;
use navtrace_core::LogDir;
use navtrace_sim::{ObjectPlacement, ObservationProbe, ScriptedSim, SimConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML simulator configuration; built-in defaults are used when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Episode dataset path
    #[arg(long, default_value = "figures/test3.json.gz")]
    dataset: PathBuf,

    /// Physics scene configuration file
    #[arg(long, default_value = "data/default.phys_scene_config.json")]
    physics_config: PathBuf,

    /// Directory for the four channel logs
    #[arg(long, default_value = "check")]
    log_dir: PathBuf,

    /// Path of the multi-panel preview figure
    #[arg(long, default_value = "figures/fig13.png")]
    figure: PathBuf,

    /// Skip rendering the preview figure
    #[arg(long, default_value_t = false)]
    no_figure: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let config = config
        .dataset_path(args.dataset)
        .physics_config_path(args.physics_config)
        .agent_height(1.5);

    // The fixed object set probed by this tool: two templates placed at known
    // world coordinates.
    let placements = vec![
        ObjectPlacement::new(0, [8.816797, 3.8141459, 7.7605705]),
        ObjectPlacement::new(6, [8.316797, 3.8141459, 6.7605705]),
    ];

    let log_dir = LogDir::new(&args.log_dir)?;
    let figure = if args.no_figure {
        None
    } else {
        Some(args.figure.as_path())
    };

    let mut probe = ObservationProbe::<ScriptedSim>::build(config)?;
    let bundle = probe.run(&placements, &log_dir, figure)?;

    println!(
        "Dumped a {}x{} observation to {:?}",
        bundle.rgb.rows(),
        bundle.rgb.cols(),
        log_dir.path()
    );
    Ok(())
}
