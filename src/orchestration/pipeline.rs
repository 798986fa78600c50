// Mon Oct 19 2026 - Alex

use crate::config::SynthConfig;
use crate::error::{PipelineError, Result};
use crate::generation::{RandomSeriesGenerator, SeriesSource};
use crate::orchestration::aggregation::{AggregateResult, AggregationCoordinator};
use crate::orchestration::generation::GenerationCoordinator;
use crate::orchestration::state::PhaseState;
use crate::store::EntityStore;
use crate::ui::display::DisplayRenderer;
use crate::utils::logging::ScopedTimer;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Runs generation, preview and aggregation in that order.
pub struct Pipeline {
    config: SynthConfig,
    source: Arc<dyn SeriesSource>,
    renderer: DisplayRenderer,
}

pub struct RunReport {
    pub store: EntityStore,
    pub aggregate: AggregateResult,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub config: SynthConfig,
    pub entities: usize,
    pub samples: usize,
    pub aggregate: AggregateResult,
    pub elapsed_ms: u128,
}

impl RunReport {
    pub fn summary(&self, config: &SynthConfig) -> RunSummary {
        let snapshot = self.store.snapshot();
        RunSummary {
            config: config.clone(),
            entities: snapshot.len(),
            samples: snapshot.value_count(),
            aggregate: self.aggregate,
            elapsed_ms: self.elapsed.as_millis(),
        }
    }
}

impl Pipeline {
    pub fn new(config: SynthConfig) -> Self {
        let source = Arc::new(RandomSeriesGenerator::new(config.seed));
        let renderer = DisplayRenderer::new().with_preview_values(config.preview_values);
        Self {
            config,
            source,
            renderer,
        }
    }

    pub fn with_source(mut self, source: Arc<dyn SeriesSource>) -> Self {
        self.source = source;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.renderer = self.renderer.with_color(use_color);
        self
    }

    /// Runs every phase, writing the preview and results to `out`. The
    /// completion signal on `state` is raised on success and on failure.
    pub fn run(&self, state: &PhaseState, out: &mut dyn Write) -> Result<RunReport> {
        let result = self.run_phases(state, out);
        state.finish();
        result
    }

    fn run_phases(&self, state: &PhaseState, out: &mut dyn Write) -> Result<RunReport> {
        let start = Instant::now();
        self.config.validate()?;
        if self.config.entity_count == 0 {
            log::warn!("entity_count is 0, aggregation will have nothing to reduce");
        }

        let store = {
            let _timer = ScopedTimer::new("generation");
            let coordinator = GenerationCoordinator::new(
                self.source.clone(),
                self.config.entity_count,
                self.config.series_length,
                self.config.value_range(),
                self.config.worker_threads,
            )?;
            coordinator.run(state)?
        };

        self.preview(&store, state, out)?;
        if !self.config.preview_pause().is_zero() {
            thread::sleep(self.config.preview_pause());
        }

        let aggregate = {
            let _timer = ScopedTimer::new("aggregation");
            AggregationCoordinator::new().run(&store)?
        };
        writeln!(out, "{}", self.renderer.render_results(&aggregate)).map_err(output_error)?;

        Ok(RunReport {
            store,
            aggregate,
            elapsed: start.elapsed(),
        })
    }

    /// Read-only pass over the first few entities plus one full series.
    fn preview(&self, store: &EntityStore, state: &PhaseState, out: &mut dyn Write) -> Result<()> {
        state.begin_inspection();
        let result = self.write_preview(store, out);
        state.end_inspection();
        result
    }

    fn write_preview(&self, store: &EntityStore, out: &mut dyn Write) -> Result<()> {
        let snapshot = store.snapshot();
        for record in snapshot.take(self.config.preview_entities) {
            if !self.config.preview_pause().is_zero() {
                thread::sleep(self.config.preview_pause());
            }
            writeln!(out, "{}", self.renderer.render_preview(record)).map_err(output_error)?;
        }

        if let Some(first) = store.get_first() {
            writeln!(out, "{}", self.renderer.render_full_series(&first)).map_err(output_error)?;
        }
        Ok(())
    }
}

fn output_error(e: std::io::Error) -> PipelineError {
    PipelineError::Output(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::FixedSeries;
    use crate::ui::status::StatusReporter;
    use parking_lot::Mutex;

    fn quiet_config() -> SynthConfig {
        SynthConfig::new()
            .with_worker_threads(4)
            .with_preview_pause_ms(0)
            .with_status_interval_ms(5)
    }

    fn run(pipeline: &Pipeline) -> (Result<RunReport>, String, PhaseState) {
        let state = PhaseState::new();
        let mut out = Vec::new();
        let result = pipeline.run(&state, &mut out);
        (result, String::from_utf8(out).unwrap(), state)
    }

    #[test]
    fn test_degenerate_range_scenario() {
        let config = quiet_config().with_entity_count(3).with_series_length(4).with_range(0.0, 0.0);
        let pipeline = Pipeline::new(config).with_color(false);
        let (result, _, state) = run(&pipeline);
        let report = result.unwrap();

        assert_eq!(report.store.count(), 3);
        for record in report.store.snapshot().records() {
            assert_eq!(record.series(), &[0.0, 0.0, 0.0, 0.0]);
            assert_eq!(record.median(), 0.0);
        }
        assert_eq!(report.aggregate, AggregateResult { min: 0.0, max: 0.0, average: 0.0 });
        assert!(state.is_finished());
    }

    #[test]
    fn test_stub_generator_scenario() {
        let config = quiet_config().with_entity_count(1).with_series_length(5).with_range(0.0, 10.0);
        let pipeline = Pipeline::new(config)
            .with_source(Arc::new(FixedSeries::new(vec![1.0, 2.0, 3.0, 4.0, 5.0])))
            .with_color(false);
        let (result, output, _) = run(&pipeline);
        let report = result.unwrap();

        assert_eq!(report.store.get("entity-1").unwrap().median(), 3.0);
        assert_eq!(report.aggregate, AggregateResult { min: 1.0, max: 5.0, average: 3.0 });
        assert!(output.contains("entity-1: 1.00, 2.00, 3.00, 4.00, 5.00..."));
        assert!(output.contains("Median: 3.00"));
        assert!(output.contains("Minimal global temperature: 1.00"));
        assert!(output.contains("Maximal global temperature: 5.00"));
        assert!(output.contains("Average global temperature: 3.00"));
    }

    #[test]
    fn test_zero_entities_fails_with_empty_store() {
        let config = quiet_config().with_entity_count(0);
        let pipeline = Pipeline::new(config).with_color(false);
        let (result, _, state) = run(&pipeline);
        assert_eq!(result.err(), Some(PipelineError::EmptyStore));
        assert!(state.is_finished());
    }

    #[test]
    fn test_invalid_config_fails_before_generation() {
        let config = quiet_config().with_range(5.0, -5.0);
        let pipeline = Pipeline::new(config).with_color(false);
        let (result, output, state) = run(&pipeline);
        assert!(result.err().unwrap().is_configuration());
        assert!(output.is_empty());
        assert_eq!(state.progress(), (0, 0));
        assert!(state.is_finished());
    }

    #[test]
    fn test_preview_is_bounded() {
        let config = quiet_config().with_entity_count(12).with_series_length(8).with_seed(5);
        let pipeline = Pipeline::new(config).with_color(false);
        let (result, output, _) = run(&pipeline);
        result.unwrap();

        let medians = output.lines().filter(|line| line.starts_with("Median: ")).count();
        assert_eq!(medians, 5);
    }

    #[test]
    fn test_full_run_with_reporter() {
        let config = quiet_config().with_entity_count(99).with_series_length(356).with_seed(9);
        let pipeline = Pipeline::new(config.clone()).with_color(false);
        let state = Arc::new(PhaseState::new());
        let updates = Arc::new(Mutex::new(0usize));

        let reporter = {
            let updates = updates.clone();
            StatusReporter::spawn(state.clone(), config.status_interval(), move |_| {
                *updates.lock() += 1;
            })
        };

        let mut out = Vec::new();
        let report = pipeline.run(&state, &mut out).unwrap();
        let ticks = reporter.join();

        assert_eq!(ticks, *updates.lock());
        assert_eq!(report.store.count(), 99);
        assert!(report.aggregate.min >= -10.0);
        assert!(report.aggregate.max <= 40.0);
        assert!(report.aggregate.min <= report.aggregate.average);
        assert!(report.aggregate.average <= report.aggregate.max);

        let summary = report.summary(&config);
        assert_eq!(summary.entities, 99);
        assert_eq!(summary.samples, 99 * 356);
        assert!(serde_json::to_string(&summary).is_ok());
    }
}
