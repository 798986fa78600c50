// Mon Oct 19 2026 - Alex

pub mod config;
pub mod error;
pub mod generation;
pub mod orchestration;
pub mod store;
pub mod ui;
pub mod utils;

pub use config::SynthConfig;
pub use error::PipelineError;
pub use generation::{MedianCalculator, RandomSeriesGenerator, SeriesSource};
pub use orchestration::{AggregateResult, AggregationCoordinator, GenerationCoordinator, Pipeline, PhaseState};
pub use store::{EntityRecord, EntityStore};
pub use ui::StatusReporter;
