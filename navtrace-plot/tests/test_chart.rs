use anyhow::Result;
use navtrace_plot::{render, PlotConfig, SeriesColor, SeriesSpec};
use std::fs::{create_dir_all, write};
use tempdir::TempDir;

fn write_metrics(dir: &std::path::Path, run_id: &str, rows: &[(f64, f64)]) -> Result<std::path::PathBuf> {
    let run_dir = dir.join("log").join(run_id).join("val");
    create_dir_all(&run_dir)?;
    let path = run_dir.join("metrics.csv");
    let mut text = String::new();
    for (time, path_length) in rows {
        text.push_str(&format!("{},3,1,72.0,0.41,{}\n", time, path_length));
    }
    write(&path, text)?;
    Ok(path)
}

#[test]
fn test_two_series_chart_saved() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let tmp = TempDir::new("chart")?;
    let a = write_metrics(tmp.path(), "run-a", &[(0.0, 10.0), (100.0, 20.0)])?;
    let b = write_metrics(tmp.path(), "run-b", &[(0.0, 5.0), (100.0, 15.0)])?;

    let config = PlotConfig::default().out_root(tmp.path().join("result"));
    let series = vec![
        SeriesSpec::new(a, "A", SeriesColor::Blue),
        SeriesSpec::new(b, "B", SeriesColor::Red),
    ];
    let out = render(&config, &series, "23-08-07 19-14-18")?;

    assert_eq!(
        out,
        tmp.path()
            .join("result/val/path_length_graph/23-08-07 19-14-18.png")
    );
    assert!(out.metadata()?.len() > 0);
    Ok(())
}

#[test]
fn test_missing_csv_aborts_without_artifact() -> Result<()> {
    let tmp = TempDir::new("chart_missing")?;
    let a = write_metrics(tmp.path(), "run-a", &[(0.0, 10.0)])?;

    let config = PlotConfig::default().out_root(tmp.path().join("result"));
    let series = vec![
        SeriesSpec::new(a, "A", SeriesColor::Blue),
        SeriesSpec::new(tmp.path().join("log/absent/val/metrics.csv"), "B", SeriesColor::Red),
    ];
    assert!(render(&config, &series, "x").is_err());
    // Nothing was created: loading failed before the result tree was touched.
    assert!(!tmp.path().join("result").exists());
    Ok(())
}

#[test]
fn test_single_point_series() -> Result<()> {
    let tmp = TempDir::new("chart_single")?;
    let a = write_metrics(tmp.path(), "run-a", &[(0.0, 10.0)])?;
    let config = PlotConfig::default().out_root(tmp.path().join("result"));
    let series = vec![SeriesSpec::new(a, "A", SeriesColor::Blue)];
    let out = render(&config, &series, "solo")?;
    assert!(out.exists());
    Ok(())
}
