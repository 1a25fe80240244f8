use std::path::Path;
use log::{debug, info, warn};
use crate::analysis::scan::{discover_captures, elapsed_ms, Capture};
use crate::analysis::temperature::{read_mic_temperature, read_surface_stats};
use crate::analysis::tone::ToneExtractor;
use crate::analysis::units::{sound_pressure_pa, spl_db};
use crate::analysis::waveform::{read_waveform, Waveform};
use crate::analysis::{AnalysisConfig, AnalysisError, CaptureSample, MeasurementSeries};
/// Tone levels of one waveform block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneLevels {
    pub sound_pa: f64,
    pub input_mv: f64,
}
/// Turns captures into reduced samples, sharing FFT plans across them.
pub struct CaptureReducer<'a> {
    config: &'a AnalysisConfig,
    dt: f64,
    extractor: ToneExtractor,
}
impl<'a> CaptureReducer<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            config,
            dt: config.sample_interval_s()?,
            extractor: ToneExtractor::new(),
        })
    }
    pub fn tone_levels(&mut self, waveform: &Waveform) -> ToneLevels {
        let target = self.config.target_frequency_hz;
        let sound_mv = self.extractor.amplitude(&waveform.sound_mv, self.dt, target);
        let input_mv = self.extractor.amplitude(&waveform.input_mv, self.dt, target);
        ToneLevels {
            sound_pa: sound_pressure_pa(sound_mv, self.config.mic_sensitivity_mv_per_pa),
            input_mv,
        }
    }
    pub fn reduce(&mut self, capture: &Capture, base_ticks: u64) -> Result<CaptureSample, AnalysisError> {
        let waveform = read_waveform(&capture.mic_path, self.config)?;
        if waveform.is_empty() {
            warn!("{} holds no samples", capture.mic_path.display());
        }
        let levels = self.tone_levels(&waveform);
        let mic_temp_c = read_mic_temperature(&capture.mic_temp_path)?;
        let surface = match &capture.thermo_path {
            Some(path) if self.config.include_thermal_frames => Some(read_surface_stats(path)?),
            _ => None,
        };
        let sample = CaptureSample {
            ticks: capture.ticks,
            elapsed_ms: elapsed_ms(capture.ticks, base_ticks),
            sound_pa: levels.sound_pa,
            sound_spl_db: spl_db(levels.sound_pa),
            input_mv: levels.input_mv,
            mic_temp_c,
            surface,
        };
        debug!(
            "capture {}: {} samples, {:.4} Pa, {:.3} mV, {:.2} °C",
            capture.stamp,
            waveform.len(),
            sample.sound_pa,
            sample.input_mv,
            sample.mic_temp_c
        );
        Ok(sample)
    }
}
/// Loads and reduces every capture under `dir`.
pub fn load_experiment(dir: &Path, config: &AnalysisConfig) -> Result<MeasurementSeries, AnalysisError> {
    let mut reducer = CaptureReducer::new(config)?;
    let captures = discover_captures(dir)?;
    let base_ticks = captures
        .iter()
        .map(|c| c.ticks)
        .min()
        .ok_or_else(|| AnalysisError::NoCaptures(dir.to_path_buf()))?;
    let mut series = MeasurementSeries::with_capacity(base_ticks, captures.len());
    for capture in &captures {
        series.push(reducer.reduce(capture, base_ticks)?);
    }
    info!(
        "reduced {} captures spanning {:.1} ms from {}",
        series.len(),
        series.duration_ms(),
        dir.display()
    );
    Ok(series)
}
