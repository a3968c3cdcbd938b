use tracing::warn;

use crate::config::ChartConfig;
use crate::curve::FoldCurve;

/// One fold, ready for the viewer: x = generation, y = log10(value).
#[derive(Clone, Debug, Default)]
pub struct PlotLine {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub dashed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ChartView {
    pub source: String,
    pub lines: Vec<PlotLine>,
    pub x_label: String,
    pub y_label: String,
    pub line_width: f32,
}

impl ChartView {
    pub fn from_curves(source: &str, curves: &[FoldCurve], chart: &ChartConfig) -> Self {
        let lines = curves
            .iter()
            .map(|curve| {
                let (kept, skipped) = curve.log_plottable();
                if skipped > 0 {
                    warn!(
                        fold = curve.fold,
                        skipped, "non-positive values cannot be drawn on a log axis"
                    );
                }
                PlotLine {
                    name: curve.label(),
                    points: kept.into_iter().map(|(x, y)| [x, y.log10()]).collect(),
                    dashed: curve.trailing,
                }
            })
            .collect();

        Self {
            source: source.to_string(),
            lines,
            x_label: chart.x_label.clone(),
            y_label: chart.y_label.clone(),
            line_width: chart.line_width,
        }
    }
}
