// Mon Oct 19 2026 - Alex

use crate::error::{PipelineError, Result};
use crate::store::{EntityStore, StoreSnapshot};
use crate::utils::math::MathUtils;
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateResult {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl AggregateResult {
    pub fn labeled(&self) -> [(&'static str, f64); 3] {
        [("Minimal", self.min), ("Maximal", self.max), ("Average", self.average)]
    }
}

/// Runs the three global reductions concurrently over a snapshot of the store.
///
/// Callers must only invoke this after generation has returned; the snapshot
/// is taken once up front so all three reductions see the same data.
pub struct AggregationCoordinator;

impl AggregationCoordinator {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, store: &EntityStore) -> Result<AggregateResult> {
        let snapshot = store.snapshot();
        if snapshot.is_empty() {
            log::error!("Aggregation requested over an empty store");
            return Err(PipelineError::EmptyStore);
        }

        log::info!(
            "Aggregating {} values across {} entities",
            snapshot.value_count(),
            snapshot.len()
        );

        let joined = panic::catch_unwind(AssertUnwindSafe(|| {
            rayon::join(
                || Self::global_min(&snapshot),
                || rayon::join(|| Self::global_max(&snapshot), || Self::global_average(&snapshot)),
            )
        }));

        let (min, (max, average)) = joined
            .map_err(|payload| PipelineError::from_panic("aggregation task panicked", payload))?;

        let result = AggregateResult {
            min: min?,
            max: max?,
            average: average?,
        };
        log::debug!("Aggregate result: {:?}", result);
        Ok(result)
    }

    pub fn global_min(snapshot: &StoreSnapshot) -> Result<f64> {
        snapshot
            .values()
            .reduce(f64::min)
            .ok_or(PipelineError::EmptyStore)
    }

    pub fn global_max(snapshot: &StoreSnapshot) -> Result<f64> {
        snapshot
            .values()
            .reduce(f64::max)
            .ok_or(PipelineError::EmptyStore)
    }

    pub fn global_average(snapshot: &StoreSnapshot) -> Result<f64> {
        let (sum, count) = snapshot
            .values()
            .fold((0.0f64, 0usize), |(sum, count), v| (sum + v, count + 1));
        if count == 0 {
            return Err(PipelineError::EmptyStore);
        }
        Ok(MathUtils::round2(sum / count as f64))
    }
}

impl Default for AggregationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityRecord;

    fn store_with(series: &[Vec<f64>]) -> EntityStore {
        let store = EntityStore::new();
        for (i, values) in series.iter().enumerate() {
            store.insert(EntityRecord::new(EntityRecord::entity_id(i), values.clone()).unwrap());
        }
        store
    }

    #[test]
    fn test_aggregate_simple() {
        let store = store_with(&[vec![1.0, 2.0, 3.0, 4.0, 5.0]]);
        let result = AggregationCoordinator::new().run(&store).unwrap();
        assert_eq!(result, AggregateResult { min: 1.0, max: 5.0, average: 3.0 });
    }

    #[test]
    fn test_aggregate_across_entities() {
        let store = store_with(&[vec![-3.5, 10.25], vec![7.0, 0.0], vec![12.75, -1.0]]);
        let result = AggregationCoordinator::new().run(&store).unwrap();
        assert_eq!(result.min, -3.5);
        assert_eq!(result.max, 12.75);
        assert_eq!(result.average, 4.25);
    }

    #[test]
    fn test_average_is_rounded() {
        let store = store_with(&[vec![1.0, 1.0, 2.0]]);
        let result = AggregationCoordinator::new().run(&store).unwrap();
        assert_eq!(result.average, 1.33);
    }

    #[test]
    fn test_bounds_hold_for_every_value() {
        let series: Vec<Vec<f64>> = (0..12)
            .map(|i| (0..30).map(|j| MathUtils::round2(((i * 31 + j * 17) % 97) as f64 / 3.0 - 10.0)).collect())
            .collect();
        let store = store_with(&series);
        let result = AggregationCoordinator::new().run(&store).unwrap();

        let all: Vec<f64> = series.iter().flatten().copied().collect();
        for v in &all {
            assert!(result.min <= *v && *v <= result.max);
        }
        let mean = MathUtils::mean(&all).unwrap();
        assert!((result.average - mean).abs() <= 0.01);
    }

    #[test]
    fn test_empty_store_fails() {
        let store = EntityStore::new();
        let err = AggregationCoordinator::new().run(&store).unwrap_err();
        assert_eq!(err, PipelineError::EmptyStore);
    }

    #[test]
    fn test_reductions_on_empty_snapshot() {
        let snapshot = StoreSnapshot::default();
        assert_eq!(AggregationCoordinator::global_min(&snapshot), Err(PipelineError::EmptyStore));
        assert_eq!(AggregationCoordinator::global_max(&snapshot), Err(PipelineError::EmptyStore));
        assert_eq!(AggregationCoordinator::global_average(&snapshot), Err(PipelineError::EmptyStore));
    }

    #[test]
    fn test_labels_are_ordered() {
        let result = AggregateResult { min: -1.0, max: 2.0, average: 0.5 };
        let labels: Vec<&str> = result.labeled().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Minimal", "Maximal", "Average"]);
    }
}
