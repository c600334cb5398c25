//! Progress reporting for long integrations
//!
//! Observers are told about each completed update. They only read counters,
//! so attaching one never changes the numbers a run produces.

use log::info;

/// Receives progress notifications from a running integration
pub trait ProgressObserver {
    /// Called once before the first update, with the number of updates to come
    fn on_start(&mut self, _total: usize) {}

    /// Called after update `step` (1-based) out of `total`
    fn on_step(&mut self, step: usize, total: usize);

    /// Called once after the last update
    fn on_finish(&mut self) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_step(&mut self, _step: usize, _total: usize) {}
}

/// Observer logging a line at `info` every `every_percent` percent
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::{LogProgress, ProgressObserver};
///
/// let mut progress = LogProgress::new(25);
/// progress.on_start(8);
/// for step in 1..=8 {
///     progress.on_step(step, 8);
/// }
/// assert_eq!(progress.reported(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct LogProgress {
    every_percent: usize,
    next_percent: usize,
    reported: usize,
}

impl LogProgress {
    /// Report every `every_percent` percent (clamped to 1..=100)
    pub fn new(every_percent: usize) -> Self {
        let every_percent = every_percent.clamp(1, 100);
        Self {
            every_percent,
            next_percent: every_percent,
            reported: 0,
        }
    }

    /// Number of milestones logged so far
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressObserver for LogProgress {
    fn on_start(&mut self, total: usize) {
        self.next_percent = self.every_percent;
        self.reported = 0;
        info!("integrating {} steps", total);
    }

    fn on_step(&mut self, step: usize, total: usize) {
        if total == 0 {
            return;
        }

        let percent = step * 100 / total;
        if percent < self.next_percent {
            return;
        }

        info!("{:>3}% ({}/{})", percent, step, total);
        self.reported += 1;

        // skip milestones already passed in one large jump
        while self.next_percent <= percent {
            self.next_percent += self.every_percent;
        }
    }

    fn on_finish(&mut self) {
        info!("integration finished");
    }
}
