// src/main.rs
mod analysis;
mod viewer;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use log::info;
use analysis::config::{
    DEFAULT_MIC_SENSITIVITY_MV_PER_PA, DEFAULT_SAMPLE_RATE_HZ, DEFAULT_TARGET_FREQUENCY_HZ,
};
use analysis::{load_experiment, render_series_png, report, AnalysisConfig, PlotStyle};
/// Reduce a capture directory to a 40 kHz level / temperature time series.
#[derive(Parser, Debug)]
#[command(name = "thermal-profile", version, about, long_about = None)]
struct Cli {
    /// Directory holding mic_<ticks>.csv and micTemp_<ticks>.csv files
    #[arg(value_name = "DATA_DIR")]
    data_dir: PathBuf,
    /// Scope sample rate in Hz
    #[arg(long, value_name = "HZ", default_value_t = DEFAULT_SAMPLE_RATE_HZ)]
    sample_rate: f64,
    /// Microphone sensitivity in mV/Pa
    #[arg(long, value_name = "MV_PER_PA", default_value_t = DEFAULT_MIC_SENSITIVITY_MV_PER_PA)]
    sensitivity: f64,
    /// Tone frequency to extract in Hz
    #[arg(long, value_name = "HZ", default_value_t = DEFAULT_TARGET_FREQUENCY_HZ)]
    frequency: f64,
    /// Write the plot to a PNG file
    #[arg(long, value_name = "PATH")]
    png: Option<PathBuf>,
    /// Write one row per capture to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
    /// Write a JSON summary
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
    /// Do not open the interactive window
    #[arg(long)]
    no_window: bool,
    /// Ignore thermo_<ticks>.csv frames
    #[arg(long)]
    no_thermo: bool,
    /// Scale every series to [0, 1]
    #[arg(long)]
    normalize: bool,
}
impl Cli {
    fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            sample_rate_hz: self.sample_rate,
            mic_sensitivity_mv_per_pa: self.sensitivity,
            target_frequency_hz: self.frequency,
            include_thermal_frames: !self.no_thermo,
            ..AnalysisConfig::default()
        }
    }
}
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = cli.analysis_config();
    let series = load_experiment(&cli.data_dir, &config)
        .with_context(|| format!("reducing captures in {}", cli.data_dir.display()))?;
    if let Some(path) = &cli.png {
        let style = PlotStyle {
            normalize: cli.normalize,
            ..PlotStyle::default()
        };
        let png = render_series_png(&series, style)?;
        fs::write(path, png).with_context(|| format!("writing {}", path.display()))?;
        info!("plot written to {}", path.display());
    }
    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        report::write_csv(&series, BufWriter::new(file))?;
        info!("table written to {}", path.display());
    }
    let summary = report::summary(&series, &config);
    if let Some(path) = &cli.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        report::write_json(&summary, BufWriter::new(file))?;
        info!("summary written to {}", path.display());
    }
    if cli.no_window {
        return Ok(());
    }
    let lines = viewer::summary_lines(&summary);
    viewer::run_viewer(series, lines, cli.normalize)
}
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
    #[test]
    fn defaults_match_rig_constants() {
        let cli = Cli::parse_from(["thermal-profile", "data"]);
        let config = cli.analysis_config();
        assert_eq!(config.sample_rate_hz, 10_000_000.0);
        assert_eq!(config.mic_sensitivity_mv_per_pa, 31.6);
        assert_eq!(config.target_frequency_hz, 40_000.0);
        assert!(config.include_thermal_frames);
        assert!(!cli.no_window);
    }
    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "thermal-profile",
            "data",
            "--frequency",
            "25000",
            "--sensitivity",
            "12.5",
            "--no-thermo",
            "--no-window",
        ]);
        let config = cli.analysis_config();
        assert_eq!(config.target_frequency_hz, 25_000.0);
        assert_eq!(config.mic_sensitivity_mv_per_pa, 12.5);
        assert!(!config.include_thermal_frames);
        assert!(cli.no_window);
    }
}
