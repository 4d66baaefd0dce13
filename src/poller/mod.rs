//! Live health polling.
//!
//! [`HealthPoller`] checks the service once on start and then on a fixed
//! interval, publishing the latest [`PollSnapshot`] through a watch channel.
//! Each check carries a generation number; a completion is applied only when
//! it is newer than the snapshot already published, so a slow early check can
//! never overwrite a later one.

mod config;
mod state;

pub use config::*;
pub use state::*;

use crate::gateway::Gateway;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Shortest accepted polling interval; shorter ones are raised to it.
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// State shared between the poller handle and its tasks.
struct Shared {
    /// Last generation handed out to an invocation
    issued: AtomicU64,
    /// Latest applied snapshot
    state: watch::Sender<PollSnapshot>,
}

/// A running timer and the token that tears it down.
struct Activation {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Periodic health checker exposing the latest connection state.
///
/// Construction starts nothing; call [`start`](Self::start) from within a
/// tokio runtime. Dropping the poller stops it.
pub struct HealthPoller {
    gateway: Arc<dyn Gateway>,
    interval: Duration,
    shared: Arc<Shared>,
    active: Option<Activation>,
}

impl HealthPoller {
    /// Create a stopped poller. `interval` is raised to [`MIN_INTERVAL`]
    /// when shorter, since a zero period would stall the timer.
    pub fn new(gateway: Arc<dyn Gateway>, interval: Duration) -> Self {
        let interval = if interval < MIN_INTERVAL {
            tracing::warn!(
                requested_ms = interval.as_millis() as u64,
                "Health poll interval below minimum, using {}s",
                MIN_INTERVAL.as_secs()
            );
            MIN_INTERVAL
        } else {
            interval
        };
        let (state, _) = watch::channel(PollSnapshot::default());
        Self {
            gateway,
            interval,
            shared: Arc::new(Shared {
                issued: AtomicU64::new(0),
                state,
            }),
            active: None,
        }
    }

    pub fn from_config(gateway: Arc<dyn Gateway>, config: &PollerConfig) -> Self {
        Self::new(gateway, Duration::from_secs(config.interval_seconds))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Begin polling: one check now, then one per interval.
    ///
    /// Calling this on a running poller does nothing.
    pub fn start(&mut self) {
        if self.active.is_some() {
            return;
        }

        let last = self.shared.issued.load(Ordering::SeqCst);
        self.shared
            .state
            .send_replace(PollSnapshot::pending_after(last));

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(poll_loop(
            Arc::clone(&self.gateway),
            Arc::clone(&self.shared),
            self.interval,
            cancel.clone(),
        ));

        tracing::info!(
            interval_seconds = self.interval.as_secs(),
            "Health poller started"
        );
        self.active = Some(Activation { cancel, handle });
    }

    /// Stop polling. Checks still in flight finish but are not applied.
    ///
    /// Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(activation) = self.active.take() {
            activation.cancel.cancel();
            activation.handle.abort();
            tracing::info!("Health poller stopped");
        }
    }

    /// Latest applied snapshot.
    pub fn snapshot(&self) -> PollSnapshot {
        self.shared.state.borrow().clone()
    }

    /// Latest connection state.
    pub fn status(&self) -> PollStatus {
        self.shared.state.borrow().status
    }

    /// Receive every applied snapshot.
    pub fn subscribe(&self) -> watch::Receiver<PollSnapshot> {
        self.shared.state.subscribe()
    }
}

impl Drop for HealthPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_loop(
    gateway: Arc<dyn Gateway>,
    shared: Arc<Shared>,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                let generation = shared.issued.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::debug!(generation, "Health poll tick");
                tokio::spawn(check_once(
                    Arc::clone(&gateway),
                    Arc::clone(&shared),
                    cancel.clone(),
                    generation,
                ));
            }
        }
    }
}

/// One health check, applied only if still current.
async fn check_once(
    gateway: Arc<dyn Gateway>,
    shared: Arc<Shared>,
    cancel: CancellationToken,
    generation: u64,
) {
    if cancel.is_cancelled() {
        return;
    }

    let outcome = gateway.check_health().await;
    let snapshot = PollSnapshot::from_outcome(generation, outcome);
    let status = snapshot.status;

    let applied = shared.state.send_if_modified(|current| {
        if cancel.is_cancelled() || generation <= current.generation {
            return false;
        }
        *current = snapshot;
        true
    });

    if applied {
        tracing::debug!(generation, status = %status, "Health poll applied");
    } else {
        tracing::debug!(generation, "Discarding stale health poll result");
    }
}
