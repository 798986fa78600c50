// Mon Oct 19 2026 - Alex

pub mod median;
pub mod series;

pub use median::MedianCalculator;
pub use series::{FixedSeries, RandomSeriesGenerator, SeriesSource, ValueRange};
