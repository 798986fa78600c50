// Mon Oct 19 2026 - Alex

pub mod aggregation;
pub mod generation;
pub mod pipeline;
pub mod state;

pub use aggregation::{AggregateResult, AggregationCoordinator};
pub use generation::GenerationCoordinator;
pub use pipeline::{Pipeline, RunReport, RunSummary};
pub use state::{Phase, PhaseState};
