//! Monitoring session - the front-end side of a monitoring run
//!
//! A session owns what an interactive shell shows the operator: a status
//! indicator, an append-only log view, and a start trigger that stays disabled
//! while a run is active. The blocking loop runs on a `spawn_blocking` worker;
//! summary lines come back over a channel and are applied on the caller's task
//! in emission order.

use crate::core::monitor::{Monitor, MonitorSettings};
use crate::core::pacer::ShutdownAwarePacer;
use crate::core::sampler::SimulatedSensors;
use crate::core::store::RecordStore;
use crate::core::summary::RunSummary;
use crate::domain::errors::VitalwatchError;
use crate::domain::result::Result;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Status indicator states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for the operator to start a run
    Idle,
    /// A run is in progress
    Running,
    /// The last run finished every cycle
    Completed,
    /// The last run was stopped by a shutdown signal
    Interrupted,
    /// The last run failed; carries the error message
    Failed(String),
}

impl SessionStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionStatus::Running)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "Enter Interval and Duration to start."),
            SessionStatus::Running => write!(f, "Monitoring Started..."),
            SessionStatus::Completed => write!(f, "Monitoring Completed."),
            SessionStatus::Interrupted => write!(f, "Monitoring Interrupted."),
            SessionStatus::Failed(message) => write!(f, "Monitoring Failed: {message}"),
        }
    }
}

/// Append-only list of summary lines in emission order
#[derive(Debug, Clone, Default)]
pub struct LogView {
    lines: Vec<String>,
}

impl LogView {
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Reported for a run whose [`ActiveRun`] was dropped without being driven
static ABANDONED: SessionStatus = SessionStatus::Interrupted;

/// A run started by [`MonitoringSession::start`], not yet driven to completion
///
/// Dropping it without calling [`MonitoringSession::drive`] stops the run at
/// its next wait; the session then reports `Interrupted`.
pub struct ActiveRun {
    lines: mpsc::UnboundedReceiver<String>,
    worker: JoinHandle<Result<RunSummary>>,
    stop: Arc<watch::Sender<bool>>,
    abandoned: Arc<AtomicBool>,
    settled: bool,
}

impl Drop for ActiveRun {
    fn drop(&mut self) {
        if !self.settled {
            self.abandoned.store(true, Ordering::SeqCst);
            let _ = self.stop.send(true);
        }
    }
}

/// Clears the worker's liveness flag when the blocking task ends
struct LiveGuard(Arc<AtomicBool>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Front-end state for monitoring runs against one store
pub struct MonitoringSession {
    store: RecordStore,
    status: SessionStatus,
    log: LogView,
    worker_live: Arc<AtomicBool>,
    abandoned: Arc<AtomicBool>,
}

impl MonitoringSession {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            status: SessionStatus::Idle,
            log: LogView::default(),
            worker_live: Arc::new(AtomicBool::new(false)),
            abandoned: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn status(&self) -> &SessionStatus {
        let abandoned = self.abandoned.load(Ordering::SeqCst)
            && !self.worker_live.load(Ordering::SeqCst);
        if self.status.is_running() && abandoned {
            &ABANDONED
        } else {
            &self.status
        }
    }

    pub fn log(&self) -> &LogView {
        &self.log
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Whether the start trigger is enabled
    pub fn can_start(&self) -> bool {
        !self.status().is_running()
    }

    /// Parse operator input and start a run
    ///
    /// Invalid input is reported without touching the status or the store.
    pub fn start_from_input(
        &mut self,
        interval_seconds: &str,
        duration_minutes: &str,
        shutdown: watch::Receiver<bool>,
    ) -> Result<ActiveRun> {
        let settings = MonitorSettings::parse(interval_seconds, duration_minutes)?;
        self.start(settings, shutdown)
    }

    /// Start a run on a blocking worker thread
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        &mut self,
        settings: MonitorSettings,
        shutdown: watch::Receiver<bool>,
    ) -> Result<ActiveRun> {
        if !self.can_start() {
            return Err(VitalwatchError::Session(
                "A monitoring run is already in progress".to_string(),
            ));
        }

        let handle = Handle::try_current()
            .map_err(|e| VitalwatchError::Session(format!("No async runtime available: {e}")))?;

        if self.status.is_running() {
            tracing::warn!("Previous monitoring run was abandoned before completion");
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let store = self.store.clone();

        // The worker stops on an external shutdown or when the run is abandoned
        let (stop_tx, stop_rx) = watch::channel(false);
        let stop = Arc::new(stop_tx);
        let forward = Arc::clone(&stop);
        let mut shutdown = shutdown;
        handle.spawn(async move {
            if shutdown.wait_for(|requested| *requested).await.is_ok() {
                let _ = forward.send(true);
            }
        });

        self.worker_live = Arc::new(AtomicBool::new(true));
        self.abandoned = Arc::new(AtomicBool::new(false));
        let live = LiveGuard(Arc::clone(&self.worker_live));

        let worker = tokio::task::spawn_blocking(move || {
            let _live = live;
            let pacer = ShutdownAwarePacer::new(handle, stop_rx);
            let mut monitor = Monitor::with_parts(SimulatedSensors::new(), store, pacer);
            monitor.run_with(&settings, |line| {
                // Receiver dropped means nobody is displaying; keep writing.
                let _ = tx.send(line);
            })
        });

        self.status = SessionStatus::Running;
        tracing::info!(
            interval_seconds = settings.interval_seconds(),
            duration_minutes = settings.duration_minutes(),
            "Monitoring session started"
        );

        Ok(ActiveRun {
            lines: rx,
            worker,
            stop,
            abandoned: Arc::clone(&self.abandoned),
            settled: false,
        })
    }

    /// Deliver every line of `run` to the log view, then settle the status
    ///
    /// `on_line` sees each line before it is appended to the log view.
    pub async fn drive<F>(&mut self, mut run: ActiveRun, mut on_line: F) -> Result<RunSummary>
    where
        F: FnMut(&str),
    {
        while let Some(line) = run.lines.recv().await {
            on_line(&line);
            self.log.push(line);
        }

        let outcome = match (&mut run.worker).await {
            Ok(result) => result,
            Err(e) => Err(VitalwatchError::Session(format!(
                "Monitoring worker failed: {e}"
            ))),
        };
        run.settled = true;

        self.status = match &outcome {
            Ok(summary) if summary.interrupted => SessionStatus::Interrupted,
            Ok(_) => SessionStatus::Completed,
            Err(e) => SessionStatus::Failed(e.to_string()),
        };

        tracing::info!(status = %self.status, lines = self.log.len(), "Monitoring session settled");
        outcome
    }
}
