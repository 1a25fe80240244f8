use std::path::{Path, PathBuf};
use thiserror::Error;
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,
    #[error("no mic_<ticks>.csv captures found in {0}")]
    NoCaptures(PathBuf),
    #[error("capture timestamp `{0}` does not fit in 64 bits")]
    InvalidTimestamp(String),
    #[error("{path}: missing column `{column}`")]
    MissingColumn { path: PathBuf, column: String },
    #[error("{path}: row {row}: `{value}` in column `{column}` is not a number")]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },
    #[error("{0}: file holds no readings")]
    EmptyFile(PathBuf),
    #[error("{0}: thermal frame has no values")]
    EmptyThermalFrame(PathBuf),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: malformed csv: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to render plot: {0}")]
    Plot(String),
    #[error("failed to write report: {0}")]
    Report(String),
}
impl AnalysisError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
    pub fn csv(path: &Path, source: csv::Error) -> Self {
        AnalysisError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for AnalysisError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        AnalysisError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for AnalysisError {
    fn from(value: image::ImageError) -> Self {
        AnalysisError::Plot(value.to_string())
    }
}
impl From<csv::Error> for AnalysisError {
    fn from(value: csv::Error) -> Self {
        AnalysisError::Report(value.to_string())
    }
}
impl From<serde_json::Error> for AnalysisError {
    fn from(value: serde_json::Error) -> Self {
        AnalysisError::Report(value.to_string())
    }
}
