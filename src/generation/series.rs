// Mon Oct 19 2026 - Alex

use crate::error::{PipelineError, Result};
use crate::utils::math::MathUtils;
use crate::utils::random::RandomUtils;
use rand::Rng;

/// Inclusive bounds for generated samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Rejects non-finite bounds, inverted bounds, a width that overflows,
    /// and ranges holding no value with at most two decimals.
    pub fn validate(&self) -> Result<()> {
        let invalid = !self.min.is_finite()
            || !self.max.is_finite()
            || self.min > self.max
            || !self.width().is_finite()
            || self.grid_min() > self.grid_max();
        if invalid {
            return Err(PipelineError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Smallest two-decimal value inside the range.
    pub fn grid_min(&self) -> f64 {
        MathUtils::ceil_to(self.min, 2)
    }

    /// Largest two-decimal value inside the range.
    pub fn grid_max(&self) -> f64 {
        MathUtils::floor_to(self.max, 2)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Produces the series for one entity. Implementations are called
/// concurrently from pool workers, one call per entity index.
pub trait SeriesSource: Send + Sync {
    fn generate(&self, index: usize, length: usize, range: ValueRange) -> Result<Vec<f64>>;

    fn name(&self) -> &str;
}

/// Uniform samples rounded to two decimals. Each call builds its own
/// generator from the base seed and the entity index, so no generator is
/// ever shared between workers.
pub struct RandomSeriesGenerator {
    base_seed: u64,
}

impl RandomSeriesGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            base_seed: seed.unwrap_or_else(RandomUtils::entropy_seed),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { base_seed: seed }
    }
}

impl SeriesSource for RandomSeriesGenerator {
    fn generate(&self, index: usize, length: usize, range: ValueRange) -> Result<Vec<f64>> {
        range.validate()?;

        let mut rng = RandomUtils::rng_for(self.base_seed, index as u64);
        let width = range.width();
        let (low, high) = (range.grid_min(), range.grid_max());

        let series = (0..length)
            .map(|_| {
                let sample = range.min + rng.random::<f64>() * width;
                MathUtils::clamp(MathUtils::round2(sample), low, high)
            })
            .collect();

        Ok(series)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Replays a fixed sequence for every entity, truncated or cycled to the
/// requested length.
pub struct FixedSeries {
    values: Vec<f64>,
}

impl FixedSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl SeriesSource for FixedSeries {
    fn generate(&self, index: usize, length: usize, range: ValueRange) -> Result<Vec<f64>> {
        range.validate()?;
        if self.values.is_empty() {
            return Err(PipelineError::EmptySeries(format!("fixed source, index {}", index)));
        }
        Ok(self.values.iter().copied().cycle().take(length).collect())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
