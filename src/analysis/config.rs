use serde::Serialize;
use crate::analysis::AnalysisError;
/// Oscilloscope block sample rate used by the acquisition rig.
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 10_000_000.0;
/// Reference microphone sensitivity.
pub const DEFAULT_MIC_SENSITIVITY_MV_PER_PA: f64 = 31.6;
/// Ultrasound carrier of the transducer array.
pub const DEFAULT_TARGET_FREQUENCY_HZ: f64 = 40_000.0;
pub const DEFAULT_SOUND_COLUMN: &str = "A Max [mV]";
pub const DEFAULT_INPUT_COLUMN: &str = "B Max [mV]";
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisConfig {
    pub sample_rate_hz: f64,
    pub mic_sensitivity_mv_per_pa: f64,
    pub target_frequency_hz: f64,
    /// Microphone channel, compared after trimming whitespace.
    pub sound_column: String,
    /// Drive signal channel.
    pub input_column: String,
    /// Reduce `thermo_<ticks>.csv` frames when they are present.
    pub include_thermal_frames: bool,
}
impl AnalysisConfig {
    /// Seconds between two waveform samples.
    pub fn sample_interval_s(&self) -> Result<f64, AnalysisError> {
        if !(self.sample_rate_hz > 0.0) {
            return Err(AnalysisError::InvalidSampleRate);
        }
        Ok(1.0 / self.sample_rate_hz)
    }
}
impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            mic_sensitivity_mv_per_pa: DEFAULT_MIC_SENSITIVITY_MV_PER_PA,
            target_frequency_hz: DEFAULT_TARGET_FREQUENCY_HZ,
            sound_column: DEFAULT_SOUND_COLUMN.to_owned(),
            input_column: DEFAULT_INPUT_COLUMN.to_owned(),
            include_thermal_frames: true,
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_interval_is_100ns() {
        let dt = AnalysisConfig::default().sample_interval_s().unwrap();
        assert!((dt - 1.0e-7).abs() < 1e-18);
    }
    #[test]
    fn rejects_non_positive_rate() {
        let config = AnalysisConfig {
            sample_rate_hz: 0.0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.sample_interval_s(),
            Err(AnalysisError::InvalidSampleRate)
        ));
        let config = AnalysisConfig {
            sample_rate_hz: f64::NAN,
            ..AnalysisConfig::default()
        };
        assert!(config.sample_interval_s().is_err());
    }
}
