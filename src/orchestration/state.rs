// Mon Oct 19 2026 - Alex

use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Generating,
    Inspecting,
    Aggregating,
}

/// Phase flags shared between the pipeline and the status reporter.
///
/// Flags use relaxed ordering; the reporter tolerates stale reads. The
/// completion signal goes through a mutex and condvar so a waiting reporter
/// wakes immediately instead of at its next tick.
#[derive(Debug)]
pub struct PhaseState {
    generating: AtomicBool,
    inspecting: AtomicBool,
    generated: AtomicUsize,
    target: AtomicUsize,
    finished: Mutex<bool>,
    finished_signal: Condvar,
}

impl PhaseState {
    pub fn new() -> Self {
        Self {
            generating: AtomicBool::new(true),
            inspecting: AtomicBool::new(false),
            generated: AtomicUsize::new(0),
            target: AtomicUsize::new(0),
            finished: Mutex::new(false),
            finished_signal: Condvar::new(),
        }
    }

    pub fn begin_generation(&self, target: usize) {
        self.target.store(target, Ordering::Relaxed);
        self.generated.store(0, Ordering::Relaxed);
        self.generating.store(true, Ordering::Relaxed);
    }

    pub fn record_generated(&self) {
        self.generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn end_generation(&self) {
        self.generating.store(false, Ordering::Relaxed);
    }

    pub fn begin_inspection(&self) {
        self.inspecting.store(true, Ordering::Relaxed);
    }

    pub fn end_inspection(&self) {
        self.inspecting.store(false, Ordering::Relaxed);
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Relaxed)
    }

    pub fn is_inspecting(&self) -> bool {
        self.inspecting.load(Ordering::Relaxed)
    }

    pub fn progress(&self) -> (usize, usize) {
        (
            self.generated.load(Ordering::Relaxed),
            self.target.load(Ordering::Relaxed),
        )
    }

    pub fn current(&self) -> Phase {
        if self.is_generating() {
            Phase::Generating
        } else if self.is_inspecting() {
            Phase::Inspecting
        } else {
            Phase::Aggregating
        }
    }

    pub fn finish(&self) {
        let mut finished = self.finished.lock();
        *finished = true;
        self.finished_signal.notify_all();
    }

    pub fn is_finished(&self) -> bool {
        *self.finished.lock()
    }

    /// Blocks for up to `timeout`. Returns `true` once processing is finished.
    pub fn wait_finished(&self, timeout: Duration) -> bool {
        let mut finished = self.finished.lock();
        if !*finished {
            let _ = self.finished_signal.wait_for(&mut finished, timeout);
        }
        *finished
    }
}

impl Default for PhaseState {
    fn default() -> Self {
        Self::new()
    }
}
