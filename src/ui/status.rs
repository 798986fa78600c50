// Mon Oct 19 2026 - Alex

use crate::orchestration::state::{Phase, PhaseState};
use colored::*;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub phase: Phase,
    pub generated: usize,
    pub target: usize,
}

impl StatusUpdate {
    pub fn message(&self) -> String {
        match self.phase {
            Phase::Generating => format!("Generating data... ({}/{})", self.generated, self.target),
            Phase::Inspecting => "Analyzing data...".to_string(),
            Phase::Aggregating => "Generating global temperature data...".to_string(),
        }
    }
}

/// Background thread that polls the phase flags on a fixed interval and
/// hands each observation to a sink. Stops within one interval of
/// `PhaseState::finish`, usually immediately.
pub struct StatusReporter {
    handle: Option<JoinHandle<usize>>,
}

impl StatusReporter {
    pub fn spawn<F>(state: Arc<PhaseState>, interval: Duration, mut sink: F) -> Self
    where
        F: FnMut(StatusUpdate) + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("status-reporter".to_string())
            .spawn(move || {
                let mut ticks = 0usize;
                while !state.is_finished() {
                    let (generated, target) = state.progress();
                    sink(StatusUpdate {
                        phase: state.current(),
                        generated,
                        target,
                    });
                    ticks += 1;

                    if state.wait_finished(interval) {
                        break;
                    }
                }
                log::debug!("Status reporter stopped after {} ticks", ticks);
                ticks
            });

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Status reporter unavailable: {}", e);
                None
            }
        };

        Self { handle }
    }

    /// Prints each update to stdout.
    pub fn spawn_console(state: Arc<PhaseState>, interval: Duration, use_color: bool) -> Self {
        Self::spawn(state, interval, move |update| {
            let message = update.message();
            if use_color {
                let styled = match update.phase {
                    Phase::Generating => message.blue(),
                    Phase::Inspecting => message.yellow(),
                    Phase::Aggregating => message.magenta(),
                };
                println!("{} {}", "[*]".dimmed(), styled);
            } else {
                println!("[*] {}", message);
            }
        })
    }

    /// Waits for the reporter thread. Returns the number of updates emitted.
    pub fn join(mut self) -> usize {
        match self.handle.take() {
            Some(handle) => match handle.join() {
                Ok(ticks) => ticks,
                Err(_) => {
                    log::warn!("Status reporter thread panicked");
                    0
                }
            },
            None => 0,
        }
    }
}
