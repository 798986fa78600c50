// Mon Oct 19 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::io;
use std::sync::Arc;
use temperature_synth::{
    orchestration::{Pipeline, PhaseState, RunReport},
    ui::{Args, DisplayRenderer, StatusReporter},
    utils::{measure_time, LoggingUtils},
    SynthConfig,
};

fn main() {
    let args = Args::parse();
    LoggingUtils::init(args.log_level());

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.to_config();
    let use_color = !args.no_color;
    let state = Arc::new(PhaseState::new());

    let reporter = if args.no_status {
        None
    } else {
        Some(StatusReporter::spawn_console(state.clone(), config.status_interval(), use_color))
    };

    let pipeline = Pipeline::new(config.clone()).with_color(use_color);
    let (outcome, elapsed) = measure_time(|| {
        let mut out = io::stdout();
        pipeline.run(&state, &mut out)
    });

    if let Some(reporter) = reporter {
        let ticks = reporter.join();
        log::debug!("Status reporter emitted {} updates", ticks);
    }

    let report = outcome.context("temperature synthesis failed")?;
    finish(args, &config, &report, elapsed)
}

fn finish(
    args: &Args,
    config: &SynthConfig,
    report: &RunReport,
    elapsed: std::time::Duration,
) -> anyhow::Result<()> {
    let renderer = DisplayRenderer::new().with_color(!args.no_color);
    println!("{}", renderer.render_elapsed(elapsed));

    if args.json {
        let summary = report.summary(config);
        let json = serde_json::to_string_pretty(&summary).context("failed to serialize run summary")?;
        println!("{}", json);
    }

    Ok(())
}
