//! Chart rendering — box plots and line plots saved as PNG files.
//!
//! Each function renders one chart to a fixed-size bitmap and finalizes the
//! backend before returning, so render buffers never accumulate across the
//! run. Every chart carries a dashed gray reference line at zero.

use crate::domain::Cohort;
use chrono::NaiveDate;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from chart rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no data points to plot for '{path}'")]
    EmptySeries { path: PathBuf },

    #[error("chart rendering failed for '{path}': {message}")]
    Render { path: PathBuf, message: String },
}

const REFERENCE_GRAY: RGBColor = RGBColor(128, 128, 128);

fn render_err<E: std::fmt::Display>(path: &Path) -> impl Fn(E) -> ChartError + '_ {
    move |e| ChartError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Pad a value range by 10% on each side and make sure zero stays visible,
/// so the reference line never sits on the plot border.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    lo = lo.min(0.0);
    hi = hi.max(0.0);
    let pad = if hi > lo { (hi - lo) * 0.1 } else { 1.0 };
    (lo - pad, hi + pad)
}

/// Render a two-box cohort comparison plot (breached vs. control).
///
/// Only observed values belong in the samples; a cohort with no
/// observations simply draws no box.
pub fn save_cohort_boxplot(
    path: impl AsRef<Path>,
    title: &str,
    y_label: &str,
    breached: &[f64],
    control: &[f64],
) -> Result<(), ChartError> {
    let path = path.as_ref();
    if breached.is_empty() && control.is_empty() {
        return Err(ChartError::EmptySeries {
            path: path.to_path_buf(),
        });
    }

    let (y_lo, y_hi) = padded_range(breached.iter().chain(control).copied());
    let (y_lo, y_hi) = (y_lo as f32, y_hi as f32);

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err(path))?;

    let labels = [Cohort::Breached.label(), Cohort::Control.label()];
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(labels[..].into_segmented(), y_lo..y_hi)
        .map_err(render_err(path))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Firm Group")
        .y_desc(y_label)
        .draw()
        .map_err(render_err(path))?;

    chart
        .draw_series(DashedLineSeries::new(
            vec![
                (SegmentValue::Exact(&labels[0]), 0.0_f32),
                (SegmentValue::Last, 0.0_f32),
            ],
            6,
            4,
            REFERENCE_GRAY.into(),
        ))
        .map_err(render_err(path))?;

    let boxes = [(&labels[0], breached, GREEN), (&labels[1], control, BLUE)];
    for (label, values, color) in boxes {
        if values.is_empty() {
            continue;
        }
        let quartiles = Quartiles::new(values);
        chart
            .draw_series(std::iter::once(
                Boxplot::new_vertical(SegmentValue::CenterOf(label), &quartiles)
                    .width(40)
                    .style(color),
            ))
            .map_err(render_err(path))?;
    }

    root.present().map_err(render_err(path))
}

/// Render a date-axis line plot with a zero reference line.
///
/// `points` must be in date order (the loaders guarantee it).
pub fn save_line_plot(
    path: impl AsRef<Path>,
    title: &str,
    y_label: &str,
    points: &[(NaiveDate, f64)],
    size: (u32, u32),
) -> Result<(), ChartError> {
    let path = path.as_ref();
    let (Some(&(first, _)), Some(&(last, _))) = (points.first(), points.last()) else {
        return Err(ChartError::EmptySeries {
            path: path.to_path_buf(),
        });
    };
    // a single-point series still needs a non-degenerate x range
    let x_hi = if last > first {
        last
    } else {
        first + chrono::Duration::days(1)
    };
    let (y_lo, y_hi) = padded_range(points.iter().map(|(_, v)| *v));

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(render_err(path))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(first..x_hi, y_lo..y_hi)
        .map_err(render_err(path))?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|d: &NaiveDate| d.format("%b %Y").to_string())
        .x_desc("Date")
        .y_desc(y_label)
        .draw()
        .map_err(render_err(path))?;

    chart
        .draw_series(DashedLineSeries::new(
            vec![(first, 0.0), (x_hi, 0.0)],
            6,
            4,
            REFERENCE_GRAY.into(),
        ))
        .map_err(render_err(path))?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(render_err(path))?;

    root.present().map_err(render_err(path))
}
