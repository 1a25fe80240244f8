use serde::Serialize;
use crate::analysis::SurfaceStats;
/// Reduced values of a single capture.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaptureSample {
    pub ticks: u64,
    pub elapsed_ms: f64,
    pub sound_pa: f64,
    pub sound_spl_db: f64,
    pub input_mv: f64,
    pub mic_temp_c: f64,
    pub surface: Option<SurfaceStats>,
}
/// Column-aligned series, one entry per capture, in capture order.
#[derive(Clone, Debug, Default)]
pub struct MeasurementSeries {
    pub base_ticks: u64,
    pub ticks: Vec<u64>,
    pub elapsed_ms: Vec<f64>,
    pub sound_pa: Vec<f64>,
    pub sound_spl_db: Vec<f64>,
    pub input_mv: Vec<f64>,
    pub mic_temp_c: Vec<f64>,
    pub surface: Vec<Option<SurfaceStats>>,
}
impl MeasurementSeries {
    pub fn with_capacity(base_ticks: u64, capacity: usize) -> Self {
        Self {
            base_ticks,
            ticks: Vec::with_capacity(capacity),
            elapsed_ms: Vec::with_capacity(capacity),
            sound_pa: Vec::with_capacity(capacity),
            sound_spl_db: Vec::with_capacity(capacity),
            input_mv: Vec::with_capacity(capacity),
            mic_temp_c: Vec::with_capacity(capacity),
            surface: Vec::with_capacity(capacity),
        }
    }
    pub fn push(&mut self, sample: CaptureSample) {
        self.ticks.push(sample.ticks);
        self.elapsed_ms.push(sample.elapsed_ms);
        self.sound_pa.push(sample.sound_pa);
        self.sound_spl_db.push(sample.sound_spl_db);
        self.input_mv.push(sample.input_mv);
        self.mic_temp_c.push(sample.mic_temp_c);
        self.surface.push(sample.surface);
    }
    pub fn len(&self) -> usize {
        self.elapsed_ms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elapsed_ms.is_empty()
    }
    pub fn duration_ms(&self) -> f64 {
        let max = self.elapsed_ms.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = self.elapsed_ms.iter().copied().fold(f64::INFINITY, f64::min);
        if self.is_empty() {
            0.0
        } else {
            max - min
        }
    }
    pub fn has_surface(&self) -> bool {
        self.surface.iter().any(Option::is_some)
    }
    /// Surface maximum temperature where a thermal frame was reduced.
    pub fn surface_max_points(&self) -> Vec<(f64, f64)> {
        self.elapsed_ms
            .iter()
            .zip(&self.surface)
            .filter_map(|(&t, s)| s.map(|s| (t, s.max_c)))
            .collect()
    }
    pub fn samples(&self) -> impl Iterator<Item = CaptureSample> + '_ {
        (0..self.len()).map(move |i| CaptureSample {
            ticks: self.ticks[i],
            elapsed_ms: self.elapsed_ms[i],
            sound_pa: self.sound_pa[i],
            sound_spl_db: self.sound_spl_db[i],
            input_mv: self.input_mv[i],
            mic_temp_c: self.mic_temp_c[i],
            surface: self.surface[i],
        })
    }
}
/// Min-max scaling to `[0, 1]`. A flat series maps to zeros.
pub fn normalized(values: &[f64]) -> Vec<f64> {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    if !(span > 0.0) {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / span).collect()
}
