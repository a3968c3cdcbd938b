use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::aggregate::FoldAggregator;
use crate::curve::FoldCurve;
use crate::error::FitplotError;
use crate::record::Record;

/// Parse a whole generation log into one curve per fold, in input order.
/// The last curve is the trailing fold.
pub fn read_curves<R: BufRead>(reader: R) -> Result<Vec<FoldCurve>, FitplotError> {
    let mut agg = FoldAggregator::new();
    let mut curves = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let record = Record::parse(&line, idx + 1)?;
        if let Some(curve) = agg.push(record)? {
            log_curve(&curve);
            curves.push(curve);
        }
    }

    let last = agg.finish()?;
    log_curve(&last);
    curves.push(last);
    Ok(curves)
}

pub fn read_curves_from_path(path: &Path) -> Result<Vec<FoldCurve>, FitplotError> {
    let file = File::open(path).map_err(|source| FitplotError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading generation log");
    read_curves(BufReader::new(file))
}

fn log_curve(curve: &FoldCurve) {
    let final_best = curve.points.last().copied().unwrap_or(f64::NAN);
    let final_average = curve.average_means.last().copied().unwrap_or(f64::NAN);
    info!(
        fold = curve.fold,
        generations = curve.generations(),
        final_best,
        final_average,
        trailing = curve.trailing,
        "fold rendered"
    );
}
