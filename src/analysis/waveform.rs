use std::fs::File;
use std::path::Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use crate::analysis::{AnalysisConfig, AnalysisError};
/// Both scope channels of one block capture, in millivolts.
#[derive(Clone, Debug, Default)]
pub struct Waveform {
    pub sound_mv: Vec<f64>,
    pub input_mv: Vec<f64>,
}
impl Waveform {
    pub fn len(&self) -> usize {
        self.sound_mv.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sound_mv.is_empty()
    }
}
/// Reads a PicoScope block export. Header names carry leading padding
/// (`"  A Max [mV]"`), so both headers and fields are trimmed.
pub fn read_waveform(path: &Path, config: &AnalysisConfig) -> Result<Waveform, AnalysisError> {
    let file = File::open(path).map_err(|e| AnalysisError::io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| AnalysisError::csv(path, e))?
        .clone();
    let sound_idx = column_index(&headers, &config.sound_column, path)?;
    let input_idx = column_index(&headers, &config.input_column, path)?;
    let mut waveform = Waveform::default();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| AnalysisError::csv(path, e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        waveform
            .sound_mv
            .push(parse_field(&record, sound_idx, row, &config.sound_column, path)?);
        waveform
            .input_mv
            .push(parse_field(&record, input_idx, row, &config.input_column, path)?);
    }
    Ok(waveform)
}
fn column_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize, AnalysisError> {
    let wanted = column.trim();
    headers
        .iter()
        .position(|h| h == wanted)
        .ok_or_else(|| AnalysisError::MissingColumn {
            path: path.to_path_buf(),
            column: wanted.to_owned(),
        })
}
fn parse_field(
    record: &StringRecord,
    idx: usize,
    row: usize,
    column: &str,
    path: &Path,
) -> Result<f64, AnalysisError> {
    let raw = record.get(idx).unwrap_or("");
    raw.parse::<f64>().map_err(|_| AnalysisError::InvalidNumber {
        path: path.to_path_buf(),
        // 1-based, counting the header line
        row: row + 2,
        column: column.trim().to_owned(),
        value: raw.to_owned(),
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
    fn reads_padded_scope_export() {
        let file = write_file(
            "  Time [ns],  A Max [mV],  B Max [mV]\n  0,  1.5,  -2.0\n  100,  -0.25,  3\n\n",
        );
        let waveform = read_waveform(file.path(), &AnalysisConfig::default()).unwrap();
        assert_eq!(waveform.len(), 2);
        assert_eq!(waveform.sound_mv, vec![1.5, -0.25]);
        assert_eq!(waveform.input_mv, vec![-2.0, 3.0]);
    }
    #[test]
    fn missing_channel_is_reported() {
        let file = write_file("  A Max [mV]\n1.0\n");
        let err = read_waveform(file.path(), &AnalysisConfig::default()).unwrap_err();
        match err {
            AnalysisError::MissingColumn { column, .. } => assert_eq!(column, "B Max [mV]"),
            other => panic!("unexpected error: {other}"),
        }
    }
    #[test]
    fn non_numeric_value_names_row() {
        let file = write_file("A Max [mV],B Max [mV]\n1.0,2.0\n1.0,oops\n");
        let err = read_waveform(file.path(), &AnalysisConfig::default()).unwrap_err();
        match err {
            AnalysisError::InvalidNumber { row, value, .. } => {
                assert_eq!(row, 3);
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_waveform(&dir.path().join("mic_1.csv"), &AnalysisConfig::default())
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }
}
