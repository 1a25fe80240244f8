// src/viewer.rs
use anyhow::anyhow;
use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use crate::analysis::report::{Stats, Summary};
use crate::analysis::{normalized, MeasurementSeries};
const SOUND_COLOR: Color32 = Color32::from_rgb(0, 200, 255);
const INPUT_COLOR: Color32 = Color32::from_rgb(255, 90, 90);
const MIC_TEMP_COLOR: Color32 = Color32::from_rgb(120, 220, 120);
const SURFACE_COLOR: Color32 = Color32::YELLOW;
/// `[x, y]` pairs for egui_plot, dropping non-finite values.
pub fn plot_points(times: &[f64], values: &[f64], normalize: bool) -> Vec<[f64; 2]> {
    let values = if normalize {
        normalized(values)
    } else {
        values.to_vec()
    };
    times
        .iter()
        .zip(values)
        .filter(|(_, v)| v.is_finite())
        .map(|(&t, v)| [t, v])
        .collect()
}
fn stats_line(label: &str, stats: Option<Stats>, unit: &str) -> String {
    match stats {
        Some(s) => format!(
            "{label}: {:.3} .. {:.3} {unit} (mean {:.3})",
            s.min, s.max, s.mean
        ),
        None => format!("{label}: n/a"),
    }
}
pub fn summary_lines(summary: &Summary<'_>) -> Vec<String> {
    let mut lines = vec![
        format!("captures: {}", summary.captures),
        format!("duration: {:.1} ms", summary.duration_ms),
        format!("tone: {:.0} Hz", summary.config.target_frequency_hz),
        stats_line("sound", summary.sound_pa, "Pa"),
        stats_line("SPL", summary.sound_spl_db, "dB"),
        stats_line("input", summary.input_mv, "mV"),
        stats_line("mic", summary.mic_temp_c, "°C"),
    ];
    if summary.surface_max_c.is_some() {
        lines.push(stats_line("surface max", summary.surface_max_c, "°C"));
    }
    lines
}
pub struct ThermalProfileApp {
    series: MeasurementSeries,
    summary_lines: Vec<String>,
    normalize: bool,
}
impl ThermalProfileApp {
    pub fn new(series: MeasurementSeries, summary_lines: Vec<String>, normalize: bool) -> Self {
        Self {
            series,
            summary_lines,
            normalize,
        }
    }
    fn line(&self, name: &str, values: &[f64], color: Color32) -> Line {
        Line::new(PlotPoints::new(plot_points(
            &self.series.elapsed_ms,
            values,
            self.normalize,
        )))
        .name(name)
        .color(color)
    }
    fn surface_line(&self) -> Option<Line> {
        if !self.series.has_surface() {
            return None;
        }
        let (times, values): (Vec<f64>, Vec<f64>) =
            self.series.surface_max_points().into_iter().unzip();
        Some(
            Line::new(PlotPoints::new(plot_points(&times, &values, self.normalize)))
                .name("surface max [°C]")
                .color(SURFACE_COLOR),
        )
    }
}
impl eframe::App for ThermalProfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("summary").min_width(240.0).show(ctx, |ui| {
            ui.heading("Thermal profile");
            ui.checkbox(&mut self.normalize, "Normalize");
            ui.separator();
            for line in &self.summary_lines {
                ui.monospace(line);
            }
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = (ui.available_height() / 2.0 - 30.0).max(120.0);
            ui.label("40 kHz level vs elapsed time [ms]");
            Plot::new("levels_plot")
                .height(height)
                .legend(Legend::default())
                .link_axis("elapsed", true, false)
                .show(ui, |plot_ui| {
                    plot_ui.line(self.line("sound pressure [Pa rms]", &self.series.sound_pa, SOUND_COLOR));
                    plot_ui.line(self.line("input [mV]", &self.series.input_mv, INPUT_COLOR));
                });
            ui.label("Temperature vs elapsed time [ms]");
            Plot::new("temperature_plot")
                .height(height)
                .legend(Legend::default())
                .link_axis("elapsed", true, false)
                .show(ui, |plot_ui| {
                    plot_ui.line(self.line("microphone [°C]", &self.series.mic_temp_c, MIC_TEMP_COLOR));
                    if let Some(line) = self.surface_line() {
                        plot_ui.line(line);
                    }
                });
        });
    }
}
/// Blocks until the window is closed.
pub fn run_viewer(
    series: MeasurementSeries,
    summary_lines: Vec<String>,
    normalize: bool,
) -> anyhow::Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1200.0, 800.0])
        .with_min_inner_size([640.0, 480.0])
        .with_title("Thermal profile");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app = ThermalProfileApp::new(series, summary_lines, normalize);
    eframe::run_native("thermal-profile", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| anyhow!("viewer window failed: {e}"))
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::summary;
    use crate::analysis::{AnalysisConfig, CaptureSample};
    #[test]
    fn points_drop_non_finite_values() {
        let points = plot_points(&[0.0, 1.0, 2.0], &[f64::NEG_INFINITY, 3.0, 5.0], false);
        assert_eq!(points, vec![[1.0, 3.0], [2.0, 5.0]]);
        let points = plot_points(&[0.0, 1.0], &[2.0, 4.0], true);
        assert_eq!(points, vec![[0.0, 0.0], [1.0, 1.0]]);
    }
    #[test]
    fn summary_panel_lines() {
        let mut series = MeasurementSeries::with_capacity(0, 1);
        series.push(CaptureSample {
            ticks: 0,
            elapsed_ms: 0.0,
            sound_pa: 1.0,
            sound_spl_db: 94.0,
            input_mv: 10.0,
            mic_temp_c: 25.0,
            surface: None,
        });
        let config = AnalysisConfig::default();
        let lines = summary_lines(&summary(&series, &config));
        assert_eq!(lines[0], "captures: 1");
        assert_eq!(lines[2], "tone: 40000 Hz");
        assert_eq!(lines.len(), 7);
    }
}
