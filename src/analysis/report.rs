use std::io::Write;
use serde::Serialize;
use crate::analysis::{AnalysisConfig, AnalysisError, MeasurementSeries};
/// Flat CSV row; thermal columns stay empty when no frame was reduced.
#[derive(Debug, Serialize)]
struct ReportRow {
    ticks: u64,
    elapsed_ms: f64,
    sound_pa: f64,
    sound_spl_db: f64,
    input_mv: f64,
    mic_temp_c: f64,
    surface_max_c: Option<f64>,
    surface_mean_c: Option<f64>,
    surface_min_c: Option<f64>,
}
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
impl Stats {
    /// `None` when no finite value is present.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            sum += v;
            count += 1;
        }
        (count > 0).then(|| Stats {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub captures: usize,
    pub base_ticks: u64,
    pub duration_ms: f64,
    pub config: &'a AnalysisConfig,
    pub sound_pa: Option<Stats>,
    pub sound_spl_db: Option<Stats>,
    pub input_mv: Option<Stats>,
    pub mic_temp_c: Option<Stats>,
    pub surface_max_c: Option<Stats>,
}
pub fn summary<'a>(series: &MeasurementSeries, config: &'a AnalysisConfig) -> Summary<'a> {
    Summary {
        captures: series.len(),
        base_ticks: series.base_ticks,
        duration_ms: series.duration_ms(),
        config,
        sound_pa: Stats::of(series.sound_pa.iter().copied()),
        sound_spl_db: Stats::of(series.sound_spl_db.iter().copied()),
        input_mv: Stats::of(series.input_mv.iter().copied()),
        mic_temp_c: Stats::of(series.mic_temp_c.iter().copied()),
        surface_max_c: Stats::of(series.surface.iter().flatten().map(|s| s.max_c)),
    }
}
pub fn write_csv<W: Write>(series: &MeasurementSeries, writer: W) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(writer);
    for sample in series.samples() {
        writer.serialize(ReportRow {
            ticks: sample.ticks,
            elapsed_ms: sample.elapsed_ms,
            sound_pa: sample.sound_pa,
            sound_spl_db: sample.sound_spl_db,
            input_mv: sample.input_mv,
            mic_temp_c: sample.mic_temp_c,
            surface_max_c: sample.surface.map(|s| s.max_c),
            surface_mean_c: sample.surface.map(|s| s.mean_c),
            surface_min_c: sample.surface.map(|s| s.min_c),
        })?;
    }
    writer
        .flush()
        .map_err(|e| AnalysisError::Report(e.to_string()))?;
    Ok(())
}
pub fn write_json<W: Write>(summary: &Summary<'_>, writer: W) -> Result<(), AnalysisError> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}
