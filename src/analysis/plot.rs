use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::coord::Shift;
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::analysis::error::AnalysisError;
use crate::analysis::series::{normalized, MeasurementSeries};
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub palette: Vec<RGBColor>,
    /// Scale every series to [0, 1] before drawing.
    pub normalize: bool,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 700,
            background: RGBColor(10, 10, 10),
            palette: vec![BLUE, RED, GREEN, CYAN, MAGENTA, YELLOW, WHITE],
            normalize: false,
        }
    }
}
struct Trace {
    label: String,
    points: Vec<(f64, f64)>,
}
fn trace(label: &str, unit: &str, times: &[f64], values: &[f64], normalize: bool) -> Trace {
    let values = if normalize {
        normalized(values)
    } else {
        values.to_vec()
    };
    Trace {
        label: if normalize {
            label.to_owned()
        } else {
            format!("{label} [{unit}]")
        },
        points: times.iter().copied().zip(values).collect(),
    }
}
/// Min / max of the finite values, widened when the range collapses.
fn value_bounds<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let (lo, hi) = values
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}
fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    y_desc: &str,
    x_range: (f64, f64),
    traces: &[Trace],
    palette_offset: usize,
    style: &PlotStyle,
) -> Result<(), AnalysisError> {
    let y_range = value_bounds(traces.iter().flat_map(|t| t.points.iter().map(|(_, v)| v)));
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .caption(caption, ("sans-serif", 20).into_font().color(&WHITE))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;
    chart
        .configure_mesh()
        .light_line_style(&WHITE.mix(0.1))
        .x_desc("Elapsed time [ms]")
        .y_desc(y_desc)
        .label_style(("sans-serif", 14).into_font().color(&WHITE))
        .axis_style(&WHITE.mix(0.6))
        .draw()?;
    for (idx, trace) in traces.iter().enumerate() {
        let color = style.palette[(idx + palette_offset) % style.palette.len()];
        let points = trace.points.iter().copied().filter(|(_, v)| v.is_finite());
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(trace.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }
    chart
        .configure_series_labels()
        .border_style(&WHITE.mix(0.2))
        .background_style(&style.background)
        .label_font(("sans-serif", 14).into_font().color(&WHITE))
        .draw()?;
    Ok(())
}
/// Renders the levels panel above the temperature panel and returns PNG bytes.
pub fn render_series_png(
    series: &MeasurementSeries,
    style: PlotStyle,
) -> Result<Vec<u8>, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::Plot("measurement series is empty".into()));
    }
    if style.palette.is_empty() {
        return Err(AnalysisError::Plot("plot palette is empty".into()));
    }
    let normalize = style.normalize;
    let times = &series.elapsed_ms;
    let levels = vec![
        trace("Sound pressure", "Pa rms", times, &series.sound_pa, normalize),
        trace("Input signal", "mV", times, &series.input_mv, normalize),
    ];
    let mut temperatures = vec![trace("Microphone", "°C", times, &series.mic_temp_c, normalize)];
    if series.has_surface() {
        let (t, v): (Vec<f64>, Vec<f64>) = series.surface_max_points().into_iter().unzip();
        temperatures.push(trace("Surface max", "°C", &t, &v, normalize));
    }
    let x_range = {
        let (lo, hi) = value_bounds(times.iter());
        (lo.min(0.0), hi)
    };
    let (level_desc, temp_desc) = if normalize {
        ("normalized", "normalized")
    } else {
        ("level", "temperature [°C]")
    };
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let (upper, lower) = root.split_vertically(style.height / 2);
        draw_panel(&upper, "40 kHz level", level_desc, x_range, &levels, 0, &style)?;
        draw_panel(&lower, "Temperature", temp_desc, x_range, &temperatures, levels.len(), &style)?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, AnalysisError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| AnalysisError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
