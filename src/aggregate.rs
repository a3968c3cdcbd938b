//! Fold/generation accumulator.
//!
//! Records arrive sorted by fold, then generation. The aggregator compares
//! every record with the fold it is tracking and with its generation counter,
//! and flushes a [`FoldCurve`] whenever the fold changes. The counter only
//! ever advances by one, so generation ids are expected to be contiguous.

use tracing::debug;

use crate::curve::FoldCurve;
use crate::error::FitplotError;
use crate::record::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Same,
    NewGeneration,
    NewFold,
}

#[derive(Clone, Debug)]
pub struct FoldAggregator {
    fold: i64,
    generation: i64,
    best: Vec<Vec<f64>>,
    average: Vec<Vec<f64>>,
}

impl Default for FoldAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldAggregator {
    /// Starts tracking fold 0 with one empty generation bucket.
    pub fn new() -> Self {
        Self {
            fold: 0,
            generation: 0,
            best: vec![Vec::new()],
            average: vec![Vec::new()],
        }
    }

    pub fn fold(&self) -> i64 {
        self.fold
    }

    pub fn generation(&self) -> i64 {
        self.generation
    }

    pub fn bucket_count(&self) -> usize {
        self.best.len()
    }

    pub fn transition(&self, record: &Record) -> Transition {
        if record.fold != self.fold {
            Transition::NewFold
        } else if record.generation != self.generation {
            Transition::NewGeneration
        } else {
            Transition::Same
        }
    }

    /// Accumulate one record. Returns the finished fold when `record` opens a
    /// new one.
    pub fn push(&mut self, record: Record) -> Result<Option<FoldCurve>, FitplotError> {
        let mut finished = None;

        if self.transition(&record) == Transition::NewFold {
            finished = Some(self.flush(false)?);
            debug!(from = self.fold, to = record.fold, "fold boundary");
            self.fold = record.fold;
        }

        // A fresh fold restarts the counter at 0, so the record may still open
        // a generation.
        if self.transition(&record) == Transition::NewGeneration {
            self.generation += 1;
            self.best.push(Vec::new());
            self.average.push(Vec::new());
        }

        let idx = self.best.len() - 1;
        self.best[idx].push(record.best_fitness);
        self.average[idx].push(record.average_fitness);

        Ok(finished)
    }

    /// Render the buckets of the tracked fold and reset to a single empty
    /// generation. The tracked fold id is left untouched.
    pub fn flush(&mut self, trailing: bool) -> Result<FoldCurve, FitplotError> {
        let best = std::mem::replace(&mut self.best, vec![Vec::new()]);
        let average = std::mem::replace(&mut self.average, vec![Vec::new()]);
        self.generation = 0;
        FoldCurve::from_buckets(self.fold, &best, &average, trailing)
    }

    /// End of stream: flush whatever the last fold accumulated.
    pub fn finish(mut self) -> Result<FoldCurve, FitplotError> {
        self.flush(true)
    }
}
