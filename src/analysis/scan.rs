use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, trace};
use crate::analysis::AnalysisError;
const MIC_PREFIX: &str = "mic_";
const MIC_TEMP_PREFIX: &str = "micTemp_";
const THERMO_PREFIX: &str = "thermo_";
const CSV_SUFFIX: &str = ".csv";
/// .NET ticks are 100 ns; ten of them make a microsecond.
const TICKS_PER_MICROSECOND: f64 = 10.0;
const MICROSECONDS_PER_MILLISECOND: f64 = 1000.0;
/// One acquisition: a microphone block plus its companion readings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    pub ticks: u64,
    /// Digits exactly as they appear in the file name.
    pub stamp: String,
    pub mic_path: PathBuf,
    pub mic_temp_path: PathBuf,
    pub thermo_path: Option<PathBuf>,
}
/// Returns the digit run of `mic_<digits>.csv`, or `None` for any other name.
pub fn parse_capture_name(name: &str) -> Option<&str> {
    let digits = name.strip_prefix(MIC_PREFIX)?.strip_suffix(CSV_SUFFIX)?;
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}
pub fn companion_path(dir: &Path, prefix: &str, stamp: &str) -> PathBuf {
    dir.join(format!("{prefix}{stamp}{CSV_SUFFIX}"))
}
/// Milliseconds between two tick stamps.
pub fn elapsed_ms(ticks: u64, base_ticks: u64) -> f64 {
    ticks.saturating_sub(base_ticks) as f64 / TICKS_PER_MICROSECOND / MICROSECONDS_PER_MILLISECOND
}
/// Lists every capture in `dir`, oldest first.
pub fn discover_captures(dir: &Path) -> Result<Vec<Capture>, AnalysisError> {
    let entries = fs::read_dir(dir).map_err(|e| AnalysisError::io(dir, e))?;
    let mut captures = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AnalysisError::io(dir, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(stamp) = parse_capture_name(name) else {
            trace!("skipping {name}");
            continue;
        };
        let ticks = stamp
            .parse::<u64>()
            .map_err(|_| AnalysisError::InvalidTimestamp(stamp.to_owned()))?;
        let thermo_path = companion_path(dir, THERMO_PREFIX, stamp);
        captures.push(Capture {
            ticks,
            stamp: stamp.to_owned(),
            mic_path: entry.path(),
            mic_temp_path: companion_path(dir, MIC_TEMP_PREFIX, stamp),
            thermo_path: thermo_path.is_file().then_some(thermo_path),
        });
    }
    if captures.is_empty() {
        return Err(AnalysisError::NoCaptures(dir.to_path_buf()));
    }
    captures.sort_by(|a, b| a.ticks.cmp(&b.ticks).then_with(|| a.stamp.cmp(&b.stamp)));
    debug!("found {} captures in {}", captures.len(), dir.display());
    Ok(captures)
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    #[test]
    fn capture_name_pattern() {
        assert_eq!(parse_capture_name("mic_637544381234567890.csv"), Some("637544381234567890"));
        assert_eq!(parse_capture_name("mic_1.csv"), Some("1"));
        assert_eq!(parse_capture_name("micTemp_123.csv"), None);
        assert_eq!(parse_capture_name("thermo_123.csv"), None);
        assert_eq!(parse_capture_name("mic_.csv"), None);
        assert_eq!(parse_capture_name("mic_12a.csv"), None);
        assert_eq!(parse_capture_name("mic_123.csv.bak"), None);
        assert_eq!(parse_capture_name("mic_123.txt"), None);
    }
    #[test]
    fn ticks_convert_to_milliseconds() {
        assert_eq!(elapsed_ms(100, 100), 0.0);
        assert_eq!(elapsed_ms(10_000 + 5, 5), 1.0);
        assert_eq!(elapsed_ms(5 + 10_000_000, 5), 1000.0);
    }
    #[test]
    fn discovers_sorted_captures_with_companions() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "mic_300.csv",
            "mic_100.csv",
            "micTemp_100.csv",
            "micTemp_300.csv",
            "thermo_300.csv",
            "thermo_300.bin",
            "notes.txt",
        ] {
            File::create(dir.path().join(name)).unwrap();
        }
        let captures = discover_captures(dir.path()).unwrap();
        assert_eq!(captures.len(), 2);
        assert_eq!(captures[0].ticks, 100);
        assert_eq!(captures[0].thermo_path, None);
        assert_eq!(captures[0].mic_temp_path, dir.path().join("micTemp_100.csv"));
        assert_eq!(captures[1].ticks, 300);
        assert_eq!(captures[1].thermo_path, Some(dir.path().join("thermo_300.csv")));
    }
    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("micTemp_1.csv")).unwrap();
        assert!(matches!(
            discover_captures(dir.path()),
            Err(AnalysisError::NoCaptures(_))
        ));
    }
    #[test]
    fn oversized_stamp_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("mic_99999999999999999999999.csv")).unwrap();
        assert!(matches!(
            discover_captures(dir.path()),
            Err(AnalysisError::InvalidTimestamp(_))
        ));
    }
}
