use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, warn};

use crate::metrics::LIMITER_TRACKED;

pub const RESET_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

pub const MAX_RESET_ATTEMPTS: u32 = 3;

pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

// Reset history for one identifier (the identifier is the map key)
#[derive(Debug, Clone, Copy)]
pub struct AttemptRecord {
    pub count: u32,
    pub window_start: Instant,
}

impl AttemptRecord {
    fn first(now: Instant) -> Self {
        Self {
            count: 1,
            window_start: now,
        }
    }

    // window has fully elapsed (strictly longer than RESET_WINDOW)
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.window_start) > RESET_WINDOW
    }
}

// Reset attempts per normalized identifier. Entry API keeps check-then-write
// under one shard lock; the sweep's retain takes the same locks.
#[derive(Debug, Default)]
pub struct ResetAttemptLimiter {
    records: DashMap<String, AttemptRecord>,
}

impl ResetAttemptLimiter {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    // rejected attempts are not counted
    pub fn check_and_record(&self, identifier: &str) -> bool {
        self.check_and_record_at(identifier, Instant::now())
    }

    pub fn check_and_record_at(&self, identifier: &str, now: Instant) -> bool {
        match self.records.entry(identifier.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(AttemptRecord::first(now));
                true
            }
            Entry::Occupied(mut slot) => {
                let record = slot.get_mut();

                // window over? start a fresh one
                if record.is_expired_at(now) {
                    *record = AttemptRecord::first(now);
                    return true;
                }

                if record.count >= MAX_RESET_ATTEMPTS {
                    return false;
                }

                record.count += 1;
                true
            }
        }
    }

    pub fn attempts(&self, identifier: &str) -> Option<u32> {
        self.attempts_at(identifier, Instant::now())
    }

    pub fn attempts_at(&self, identifier: &str, now: Instant) -> Option<u32> {
        self.records
            .get(identifier)
            .filter(|record| !record.is_expired_at(now))
            .map(|record| record.count)
    }

    // returns number of records removed
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    pub fn sweep_at(&self, now: Instant) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| !record.is_expired_at(now));
        before.saturating_sub(self.records.len())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Background sweep handle, dropping it aborts the task
pub struct CleanupTask {
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl CleanupTask {
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|handle| handle.is_finished())
    }
}

impl Drop for CleanupTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

// Needs a tokio runtime. A zero period falls back to CLEANUP_INTERVAL
// (tokio's interval panics on zero).
pub fn spawn_cleanup(limiter: Arc<ResetAttemptLimiter>, every: Duration) -> CleanupTask {
    let every = if every.is_zero() {
        warn!("Zero cleanup interval requested, using {:?}", CLEANUP_INTERVAL);
        CLEANUP_INTERVAL
    } else {
        every
    };
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    // first sweep one period from now, not immediately
    let mut ticker = interval_at(Instant::now() + every, every);

    info!("Reset limiter cleanup started (interval: {:?})", every);

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = limiter.sweep();
                    LIMITER_TRACKED.set(limiter.len() as f64);
                    if removed > 0 {
                        debug!(removed, remaining = limiter.len(), "Swept expired reset records");
                    }
                }
                _ = &mut shutdown_rx => {
                    info!("Reset limiter cleanup stopped");
                    break;
                }
            }
        }
    });

    CleanupTask {
        shutdown: Some(shutdown_tx),
        handle: Some(handle),
    }
}
