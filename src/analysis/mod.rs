// src/analysis/mod.rs
pub mod config;
pub mod error;
pub mod pipeline;
pub mod plot;
pub mod report;
pub mod scan;
pub mod series;
pub mod temperature;
pub mod tone;
pub mod units;
pub mod waveform;
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use pipeline::load_experiment;
pub use plot::{render_series_png, PlotStyle};
pub use series::{normalized, CaptureSample, MeasurementSeries};
pub use temperature::SurfaceStats;
