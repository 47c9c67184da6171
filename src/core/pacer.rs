//! Wait primitives used between monitoring cycles

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Result of waiting out one interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOutcome {
    /// The full interval passed
    Elapsed,
    /// A shutdown signal cut the wait short
    Interrupted,
}

/// Blocks the calling thread between cycles
pub trait Pacer {
    fn pause(&mut self, interval: Duration) -> PauseOutcome;
}

/// Plain thread sleep; cannot be interrupted
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleepPacer;

impl Pacer for ThreadSleepPacer {
    fn pause(&mut self, interval: Duration) -> PauseOutcome {
        std::thread::sleep(interval);
        PauseOutcome::Elapsed
    }
}

/// Sleeps on the tokio runtime while watching a shutdown signal
///
/// Must be used from a blocking context (e.g. inside `spawn_blocking`), never
/// from an async task.
pub struct ShutdownAwarePacer {
    handle: Handle,
    shutdown: watch::Receiver<bool>,
}

impl ShutdownAwarePacer {
    pub fn new(handle: Handle, shutdown: watch::Receiver<bool>) -> Self {
        Self { handle, shutdown }
    }

    /// Returns true once a shutdown has been requested
    pub fn shutdown_requested(&self) -> bool {
        *self.shutdown.borrow()
    }
}

impl Pacer for ShutdownAwarePacer {
    fn pause(&mut self, interval: Duration) -> PauseOutcome {
        if self.shutdown_requested() {
            return PauseOutcome::Interrupted;
        }

        let shutdown = &mut self.shutdown;
        self.handle.block_on(async move {
            let deadline = tokio::time::Instant::now() + interval;
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => PauseOutcome::Elapsed,
                changed = shutdown.wait_for(|stop| *stop) => match changed {
                    Ok(_) => PauseOutcome::Interrupted,
                    // Sender gone: nobody can interrupt any more, finish the wait.
                    Err(_) => {
                        tokio::time::sleep_until(deadline).await;
                        PauseOutcome::Elapsed
                    }
                },
            }
        })
    }
}
