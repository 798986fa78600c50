// Mon Oct 19 2026 - Alex

use crate::error::{PipelineError, Result};
use crate::generation::ValueRange;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    pub entity_count: usize,
    pub series_length: usize,
    pub min_value: f64,
    pub max_value: f64,
    pub worker_threads: usize,
    pub seed: Option<u64>,
    pub status_interval_ms: u64,
    pub preview_entities: usize,
    pub preview_values: usize,
    pub preview_pause_ms: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            entity_count: 99,
            series_length: 356,
            min_value: -10.0,
            max_value: 40.0,
            worker_threads: num_cpus::get(),
            seed: None,
            status_interval_ms: 100,
            preview_entities: 5,
            preview_values: 5,
            preview_pause_ms: 100,
        }
    }
}

impl SynthConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity_count(mut self, count: usize) -> Self {
        self.entity_count = count;
        self
    }

    pub fn with_series_length(mut self, length: usize) -> Self {
        self.series_length = length;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_status_interval_ms(mut self, interval: u64) -> Self {
        self.status_interval_ms = interval;
        self
    }

    pub fn with_preview_pause_ms(mut self, pause: u64) -> Self {
        self.preview_pause_ms = pause;
        self
    }

    pub fn value_range(&self) -> ValueRange {
        ValueRange::new(self.min_value, self.max_value)
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }

    pub fn preview_pause(&self) -> Duration {
        Duration::from_millis(self.preview_pause_ms)
    }

    /// A zero entity count is accepted; aggregation reports it as an empty store.
    pub fn validate(&self) -> Result<()> {
        if !self.min_value.is_finite() || !self.max_value.is_finite() {
            return Err(PipelineError::InvalidConfig(
                "min_value and max_value must be finite".to_string(),
            ));
        }
        self.value_range().validate()?;
        if self.series_length == 0 {
            return Err(PipelineError::InvalidConfig(
                "series_length must be greater than 0".to_string(),
            ));
        }
        if self.worker_threads == 0 {
            return Err(PipelineError::InvalidConfig(
                "worker_threads must be greater than 0".to_string(),
            ));
        }
        if self.status_interval_ms == 0 {
            return Err(PipelineError::InvalidConfig(
                "status_interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SynthConfig::default();
        assert_eq!(config.entity_count, 99);
        assert_eq!(config.series_length, 356);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = SynthConfig::new().with_range(10.0, -10.0);
        let err = config.validate().unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err, PipelineError::InvalidRange { min: 10.0, max: -10.0 });
    }

    #[test]
    fn test_degenerate_range_accepted() {
        let config = SynthConfig::new().with_range(0.0, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overflowing_range_rejected() {
        let config = SynthConfig::new().with_range(-1e308, 1e308);
        assert_eq!(
            config.validate(),
            Err(PipelineError::InvalidRange { min: -1e308, max: 1e308 })
        );
    }

    #[test]
    fn test_range_without_two_decimal_value_rejected() {
        let config = SynthConfig::new().with_range(0.001, 0.009);
        assert!(matches!(config.validate(), Err(PipelineError::InvalidRange { .. })));
        assert!(SynthConfig::new().with_range(0.004, 1.0).validate().is_ok());
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = SynthConfig::new().with_series_length(0);
        assert!(matches!(config.validate(), Err(PipelineError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_finite_bound_rejected() {
        let config = SynthConfig::new().with_range(f64::NAN, 1.0);
        assert!(matches!(config.validate(), Err(PipelineError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = SynthConfig::new().with_worker_threads(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_entities_accepted() {
        let config = SynthConfig::new().with_entity_count(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serializes() {
        let config = SynthConfig::new().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: SynthConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
