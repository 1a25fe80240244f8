//! Conversions from scope millivolts to acoustic quantities.
use std::f64::consts::SQRT_2;
/// Threshold of hearing, the 0 dB reference for airborne sound.
pub const REFERENCE_PRESSURE_PA: f64 = 20.0e-6;
/// Peak microphone voltage to RMS sound pressure.
pub fn sound_pressure_pa(amplitude_mv: f64, mv_per_pa: f64) -> f64 {
    amplitude_mv / mv_per_pa / SQRT_2
}
/// Sound pressure level in dB re 20 µPa. Silence maps to negative infinity.
pub fn spl_db(pressure_pa_rms: f64) -> f64 {
    if pressure_pa_rms <= 0.0 {
        return f64::NEG_INFINITY;
    }
    20.0 * (pressure_pa_rms / REFERENCE_PRESSURE_PA).log10()
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn peak_millivolts_to_rms_pascal() {
        let p = sound_pressure_pa(31.6 * SQRT_2, 31.6);
        assert!((p - 1.0).abs() < 1e-12);
    }
    #[test]
    fn spl_reference_points() {
        assert!(spl_db(REFERENCE_PRESSURE_PA).abs() < 1e-9);
        assert!((spl_db(1.0) - 93.979_400_086_720_38).abs() < 1e-9);
        assert!((spl_db(2000.0) - 160.0).abs() < 1e-9);
        assert_eq!(spl_db(0.0), f64::NEG_INFINITY);
    }
}
