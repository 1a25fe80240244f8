use std::fs::File;
use std::path::Path;
use csv::{ReaderBuilder, Trim};
use serde::Serialize;
use crate::analysis::AnalysisError;
/// Reduction of one thermal camera frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SurfaceStats {
    pub max_c: f64,
    pub mean_c: f64,
    pub min_c: f64,
}
fn headerless_reader(path: &Path) -> Result<csv::Reader<File>, AnalysisError> {
    let file = File::open(path).map_err(|e| AnalysisError::io(path, e))?;
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file))
}
fn parse_celsius(raw: &str, row: usize, path: &Path) -> Result<f64, AnalysisError> {
    raw.parse::<f64>().map_err(|_| AnalysisError::InvalidNumber {
        path: path.to_path_buf(),
        row,
        column: "temperature".to_owned(),
        value: raw.to_owned(),
    })
}
/// Microphone thermistor reading: the first field of the first line.
pub fn read_mic_temperature(path: &Path) -> Result<f64, AnalysisError> {
    let mut reader = headerless_reader(path)?;
    for record in reader.records() {
        let record = record.map_err(|e| AnalysisError::csv(path, e))?;
        if let Some(first) = record.get(0) {
            return parse_celsius(first, 1, path);
        }
    }
    Err(AnalysisError::EmptyFile(path.to_path_buf()))
}
/// Max / mean / min of a `thermo_<ticks>.csv` frame (°C values separated by `", "`).
pub fn read_surface_stats(path: &Path) -> Result<SurfaceStats, AnalysisError> {
    let mut reader = headerless_reader(path)?;
    let mut max_c = f64::NEG_INFINITY;
    let mut min_c = f64::INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| AnalysisError::csv(path, e))?;
        for field in record.iter().filter(|f| !f.is_empty()) {
            let value = parse_celsius(field, row + 1, path)?;
            max_c = max_c.max(value);
            min_c = min_c.min(value);
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        return Err(AnalysisError::EmptyThermalFrame(path.to_path_buf()));
    }
    Ok(SurfaceStats {
        max_c,
        mean_c: sum / count as f64,
        min_c,
    })
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }
    #[test]
    fn mic_temperature_is_first_field() {
        let file = write_file("24.75\r\n");
        assert_eq!(read_mic_temperature(file.path()).unwrap(), 24.75);
        let file = write_file("  25.5 , 99\n26\n");
        assert_eq!(read_mic_temperature(file.path()).unwrap(), 25.5);
    }
    #[test]
    fn empty_mic_temperature_file() {
        let file = write_file("\n");
        assert!(matches!(
            read_mic_temperature(file.path()),
            Err(AnalysisError::EmptyFile(_))
        ));
        let file = write_file("n/a\n");
        assert!(matches!(
            read_mic_temperature(file.path()),
            Err(AnalysisError::InvalidNumber { .. })
        ));
    }
    #[test]
    fn surface_stats_over_frame() {
        let file = write_file("20, 22, 24\n30, 26, 22\n\n");
        let stats = read_surface_stats(file.path()).unwrap();
        assert_eq!(stats.max_c, 30.0);
        assert_eq!(stats.min_c, 20.0);
        assert!((stats.mean_c - 24.0).abs() < 1e-12);
    }
    #[test]
    fn empty_frame_is_rejected() {
        let file = write_file("\n\n");
        assert!(matches!(
            read_surface_stats(file.path()),
            Err(AnalysisError::EmptyThermalFrame(_))
        ));
    }
}
