// Mon Oct 19 2026 - Alex

use crate::error::{PipelineError, Result};
use crate::generation::MedianCalculator;
use serde::Serialize;

/// A published entity. Series and median are set together at construction
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
    id: String,
    series: Vec<f64>,
    median: f64,
}

impl EntityRecord {
    pub fn new(id: String, series: Vec<f64>) -> Result<Self> {
        let median = MedianCalculator::median(&series)
            .ok_or_else(|| PipelineError::EmptySeries(id.clone()))?;
        Ok(Self { id, series, median })
    }

    pub fn entity_id(index: usize) -> String {
        format!("entity-{}", index + 1)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn series(&self) -> &[f64] {
        &self.series
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn head(&self, count: usize) -> &[f64] {
        &self.series[..count.min(self.series.len())]
    }
}
