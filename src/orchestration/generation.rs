// Mon Oct 19 2026 - Alex

use crate::error::{PipelineError, Result};
use crate::generation::{SeriesSource, ValueRange};
use crate::orchestration::state::PhaseState;
use crate::store::{EntityRecord, EntityStore};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Fans entity generation out over a bounded rayon pool.
pub struct GenerationCoordinator {
    pool: ThreadPool,
    source: Arc<dyn SeriesSource>,
    entity_count: usize,
    series_length: usize,
    range: ValueRange,
}

impl GenerationCoordinator {
    pub fn new(
        source: Arc<dyn SeriesSource>,
        entity_count: usize,
        series_length: usize,
        range: ValueRange,
        worker_threads: usize,
    ) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_threads.max(1))
            .thread_name(|i| format!("synth-worker-{}", i))
            .build()
            .map_err(|e| PipelineError::ThreadPool(e.to_string()))?;

        Ok(Self {
            pool,
            source,
            entity_count,
            series_length,
            range,
        })
    }

    pub fn worker_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Generates every entity and returns the filled store. Returns only after
    /// all tasks have joined; any task error or panic aborts the whole phase
    /// and the partial store is dropped.
    pub fn run(&self, state: &PhaseState) -> Result<EntityStore> {
        let store = EntityStore::with_capacity(self.entity_count);
        state.begin_generation(self.entity_count);

        log::info!(
            "Generating {} entities x {} samples in [{}, {}] on {} workers ({} source)",
            self.entity_count,
            self.series_length,
            self.range.min,
            self.range.max,
            self.worker_threads(),
            self.source.name()
        );

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.pool.install(|| {
                (0..self.entity_count)
                    .into_par_iter()
                    .try_for_each(|index| self.generate_one(index, &store, state))
            })
        }));

        state.end_generation();

        match outcome {
            Ok(Ok(())) => {
                log::info!("Generation finished: {} entities published", store.count());
                Ok(store)
            }
            Ok(Err(e)) => {
                log::error!("Generation aborted: {}", e);
                Err(e)
            }
            Err(payload) => {
                let e = PipelineError::from_panic("generation task panicked", payload);
                log::error!("Generation aborted: {}", e);
                Err(e)
            }
        }
    }

    fn generate_one(&self, index: usize, store: &EntityStore, state: &PhaseState) -> Result<()> {
        let id = EntityRecord::entity_id(index);
        let series = self.source.generate(index, self.series_length, self.range)?;

        if series.len() != self.series_length {
            return Err(PipelineError::TaskFailed(format!(
                "{} produced {} samples, expected {}",
                id,
                series.len(),
                self.series_length
            )));
        }

        let record = EntityRecord::new(id, series)?;
        log::trace!("Publishing {} (median {})", record.id(), record.median());
        store.insert(record);
        state.record_generated();
        Ok(())
    }
}
