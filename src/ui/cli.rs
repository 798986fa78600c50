// Mon Oct 19 2026 - Alex

use crate::config::SynthConfig;
use crate::utils::logging::LoggingUtils;
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "temperature-synth")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Synthesizes per-city temperature series and computes global statistics")]
#[command(long_about = None)]
pub struct Args {
    #[arg(long, help = "Number of entities to generate")]
    pub entities: Option<usize>,

    #[arg(long, help = "Samples per entity")]
    pub length: Option<usize>,

    #[arg(long, allow_hyphen_values = true, help = "Inclusive lower bound for samples")]
    pub min: Option<f64>,

    #[arg(long, allow_hyphen_values = true, help = "Inclusive upper bound for samples")]
    pub max: Option<f64>,

    #[arg(long, help = "Number of worker threads")]
    pub threads: Option<usize>,

    #[arg(long, help = "Base seed for reproducible output")]
    pub seed: Option<u64>,

    #[arg(long, help = "Status reporter interval in milliseconds")]
    pub interval_ms: Option<u64>,

    #[arg(long, help = "Pause between preview lines in milliseconds")]
    pub preview_pause_ms: Option<u64>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,

    #[arg(long, help = "Explicit log level (overrides -v)")]
    pub log_level: Option<String>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Disable the status reporter")]
    pub no_status: bool,

    #[arg(long, help = "Print a JSON run summary")]
    pub json: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match &self.log_level {
            Some(level) => LoggingUtils::level_from_str(level),
            None => LoggingUtils::level_from_verbosity(self.verbose),
        }
    }

    /// Defaults overridden by whichever flags were given.
    pub fn to_config(&self) -> SynthConfig {
        let mut config = SynthConfig::default();
        if let Some(entities) = self.entities {
            config.entity_count = entities;
        }
        if let Some(length) = self.length {
            config.series_length = length;
        }
        if let Some(min) = self.min {
            config.min_value = min;
        }
        if let Some(max) = self.max {
            config.max_value = max;
        }
        if let Some(threads) = self.threads {
            config.worker_threads = threads;
        }
        if let Some(interval) = self.interval_ms {
            config.status_interval_ms = interval;
        }
        if let Some(pause) = self.preview_pause_ms {
            config.preview_pause_ms = pause;
        }
        config.seed = self.seed;
        config
    }
}
