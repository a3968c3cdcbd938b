//! Static rendering of the fitness chart with plotters.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use crate::config::{ChartConfig, ExportConfig};
use crate::curve::{FoldCurve, positive_range};
use crate::error::FitplotError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self, FitplotError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(FitplotError::UnsupportedOutput {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub fn export_chart(
    out_path: &Path,
    curves: &[FoldCurve],
    chart: &ChartConfig,
    export: &ExportConfig,
) -> Result<(), Box<dyn Error>> {
    let format = ExportFormat::from_path(out_path)?;
    let size = (export.width, export.height);
    match format {
        ExportFormat::Png => {
            draw_chart(BitMapBackend::new(out_path, size).into_drawing_area(), curves, chart)?
        }
        ExportFormat::Svg => {
            draw_chart(SVGBackend::new(out_path, size).into_drawing_area(), curves, chart)?
        }
    }
    info!(path = %out_path.display(), "chart written");
    Ok(())
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    curves: &[FoldCurve],
    chart_cfg: &ChartConfig,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_max = curves
        .iter()
        .map(|c| c.generations().saturating_sub(1))
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let (y_lo, y_hi) = positive_range(curves).unwrap_or((1.0, 10.0));
    let (y_lo, y_hi) = if y_lo < y_hi {
        (y_lo * 0.9, y_hi * 1.1)
    } else {
        (y_lo * 0.5, y_hi * 2.0)
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(chart_cfg.x_label.as_str())
        .y_desc(chart_cfg.y_label.as_str())
        .draw()?;

    let width = chart_cfg.line_width.max(1.0).round() as u32;
    for (idx, curve) in curves.iter().enumerate() {
        let (points, skipped) = curve.log_plottable();
        if skipped > 0 {
            warn!(
                fold = curve.fold,
                skipped, "non-positive values cannot be drawn on a log axis"
            );
        }
        let color = Palette99::pick(idx).to_rgba();
        let style = color.stroke_width(width);

        let anno = if curve.trailing {
            chart.draw_series(DashedLineSeries::new(points, 10, 5, style))?
        } else {
            chart.draw_series(LineSeries::new(points, style))?
        };
        anno.label(curve.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
