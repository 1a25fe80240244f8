use rustfft::{num_complex::Complex64, FftPlanner};
/// One-sided magnitude spectrum of a real signal, scaled so that a pure sine
/// sitting on a bin reads back its peak amplitude.
#[derive(Clone, Debug)]
pub struct OneSidedSpectrum {
    pub frequencies_hz: Vec<f64>,
    pub magnitudes: Vec<f64>,
}
impl OneSidedSpectrum {
    pub fn magnitude_near(&self, frequency_hz: f64) -> f64 {
        if self.magnitudes.is_empty() {
            return 0.0;
        }
        self.magnitudes[nearest_bin(&self.frequencies_hz, frequency_hz)]
    }
}
/// Extracts single-frequency amplitudes, caching FFT plans between captures
/// of the same length.
pub struct ToneExtractor {
    planner: FftPlanner<f64>,
}
impl ToneExtractor {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }
    pub fn one_sided_spectrum(&mut self, samples: &[f64], dt: f64) -> OneSidedSpectrum {
        let n = samples.len();
        if n == 0 {
            return OneSidedSpectrum {
                frequencies_hz: Vec::new(),
                magnitudes: Vec::new(),
            };
        }
        let fft = self.planner.plan_fft_forward(n);
        let mut buffer: Vec<Complex64> = samples.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        fft.process(&mut buffer);
        let scale = n as f64 / 2.0;
        let magnitudes = buffer
            .iter()
            .take(n / 2 + 1)
            .map(|c| c.norm() / scale)
            .collect();
        OneSidedSpectrum {
            frequencies_hz: rfft_frequencies(n, dt),
            magnitudes,
        }
    }
    /// Peak amplitude of `samples` at the bin nearest `target_hz`, in the
    /// samples' own unit.
    pub fn amplitude(&mut self, samples: &[f64], dt: f64, target_hz: f64) -> f64 {
        self.one_sided_spectrum(samples, dt).magnitude_near(target_hz)
    }
}
impl Default for ToneExtractor {
    fn default() -> Self {
        Self::new()
    }
}
/// Bin centre frequencies `k / (n * dt)` for `k in 0..=n/2`.
pub fn rfft_frequencies(n: usize, dt: f64) -> Vec<f64> {
    let resolution = 1.0 / (n as f64 * dt);
    (0..=n / 2).map(|k| k as f64 * resolution).collect()
}
/// Index of the element closest to `value`; the first one wins ties.
pub fn nearest_bin(frequencies: &[f64], value: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (idx, &f) in frequencies.iter().enumerate() {
        let distance = (f - value).abs();
        if distance < best_distance {
            best = idx;
            best_distance = distance;
        }
    }
    best
}
