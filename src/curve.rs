//! Per-fold rendered series: `1 + min(best)` for every generation.

use crate::error::FitplotError;

#[derive(Clone, Debug, PartialEq)]
pub struct FoldCurve {
    pub fold: i64,
    /// One value per generation, `1 + min(best bucket)`.
    pub points: Vec<f64>,
    /// Mean of the average-fitness values of each generation.
    pub average_means: Vec<f64>,
    /// Set on the last fold of a stream, which is flushed at end of input.
    pub trailing: bool,
}

impl FoldCurve {
    pub fn from_buckets(
        fold: i64,
        best: &[Vec<f64>],
        average: &[Vec<f64>],
        trailing: bool,
    ) -> Result<Self, FitplotError> {
        Ok(Self {
            fold,
            points: best_curve(fold, best)?,
            average_means: average.iter().map(|bucket| mean(bucket)).collect(),
            trailing,
        })
    }

    pub fn label(&self) -> String {
        format!("fold {}", self.fold)
    }

    pub fn generations(&self) -> usize {
        self.points.len()
    }

    /// `(generation, value)` pairs that can sit on a log axis, plus the
    /// number of points dropped for being non-positive or non-finite.
    pub fn log_plottable(&self) -> (Vec<(f64, f64)>, usize) {
        let kept: Vec<(f64, f64)> = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite() && **v > 0.0)
            .map(|(g, v)| (g as f64, *v))
            .collect();
        let skipped = self.points.len() - kept.len();
        (kept, skipped)
    }
}

/// `1 + min(bucket)` for each generation. An empty bucket is an error.
pub fn best_curve(fold: i64, best: &[Vec<f64>]) -> Result<Vec<f64>, FitplotError> {
    best.iter()
        .enumerate()
        .map(|(generation, bucket)| {
            if bucket.is_empty() {
                return Err(FitplotError::EmptyGeneration { fold, generation });
            }
            Ok(1.0 + first_order_min(bucket))
        })
        .collect()
}

/// Minimum that keeps the running value unless a later one compares
/// strictly smaller. A leading NaN therefore sticks; a later NaN never wins.
fn first_order_min(bucket: &[f64]) -> f64 {
    bucket[1..]
        .iter()
        .copied()
        .fold(bucket[0], |acc, v| if v < acc { v } else { acc })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Smallest and largest log-plottable value across all curves.
pub fn positive_range(curves: &[FoldCurve]) -> Option<(f64, f64)> {
    curves
        .iter()
        .flat_map(|c| c.points.iter().copied())
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
