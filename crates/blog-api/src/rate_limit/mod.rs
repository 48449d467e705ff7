//! Per-client rate limiting with fixed-window counters
//!
//! Bounds the rate of state-mutating requests per client network identity.
//! Counters live only in process memory: losing them on restart weakens
//! protection but never breaks correctness. Fixed windows admit a burst of
//! up to 2x the nominal rate across a window boundary; that approximation
//! is accepted in exchange for O(1) state per client.

use std::sync::Arc;
use std::time::{Duration, Instant};

use blog_common::RateLimitConfig;
use dashmap::DashMap;
use tracing::debug;

/// Outcome of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request may proceed
    pub admitted: bool,
    /// Requests left in the current window
    pub remaining: u32,
    /// Time until the current window resets
    pub reset_after: Duration,
}

/// Per-identity counter for the current window
struct WindowEntry {
    count: u32,
    started_at: Instant,
}

/// In-memory fixed-window rate limiter
///
/// Cheap to clone; all clones share one counter table. The table is the
/// only mutable state shared across request handlers, and each entry's
/// read-modify-write happens under the map's per-entry lock.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<RateLimiterInner>,
}

struct RateLimiterInner {
    max_requests: u32,
    window: Duration,
    windows: DashMap<String, WindowEntry>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(RateLimiterInner {
                max_requests: max_requests.max(1),
                window,
                windows: DashMap::new(),
            }),
        }
    }

    /// Create a rate limiter from application configuration
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, config.window())
    }

    /// Check whether a request from `identity` is admitted
    ///
    /// Every admitted call consumes one slot in the identity's current
    /// window. A rejected call mutates nothing.
    pub fn check(&self, identity: &str) -> RateLimitDecision {
        self.check_at(identity, Instant::now())
    }

    /// Admission check against an explicit clock, so window arithmetic is
    /// testable without sleeping
    fn check_at(&self, identity: &str, now: Instant) -> RateLimitDecision {
        let max = self.inner.max_requests;
        let window = self.inner.window;

        let mut entry = self
            .inner
            .windows
            .entry(identity.to_owned())
            .or_insert_with(|| WindowEntry {
                count: 0,
                started_at: now,
            });

        let elapsed = now.saturating_duration_since(entry.started_at);
        if entry.count == 0 || elapsed > window {
            // Fresh entry, or the previous window elapsed: start a new one
            entry.count = 1;
            entry.started_at = now;
            RateLimitDecision {
                admitted: true,
                remaining: max - 1,
                reset_after: window,
            }
        } else if entry.count < max {
            entry.count += 1;
            RateLimitDecision {
                admitted: true,
                remaining: max - entry.count,
                reset_after: window - elapsed,
            }
        } else {
            RateLimitDecision {
                admitted: false,
                remaining: 0,
                reset_after: window - elapsed,
            }
        }
    }

    /// The configured per-window request budget
    pub fn max_requests(&self) -> u32 {
        self.inner.max_requests
    }

    /// Drop entries whose window has already elapsed
    ///
    /// Garbage collection only: a stale entry read before the sweep is
    /// reset on the overdue-read path in `check_at`.
    pub fn sweep(&self) {
        let window = self.inner.window;
        // Removals are counted inside the closure: checks running
        // concurrently can grow the map mid-retain, so a before/after
        // length difference is not a removal count.
        let mut removed = 0usize;
        self.inner.windows.retain(|_, entry| {
            let keep = entry.started_at.elapsed() <= window;
            if !keep {
                removed += 1;
            }
            keep
        });
        if removed > 0 {
            debug!(removed, "Swept expired rate limit windows");
        }
    }

    /// Spawn a background task that sweeps expired windows periodically
    ///
    /// The task runs for the life of the process and holds its own clone
    /// of the shared counter table.
    pub fn spawn_sweeper(&self, every: Duration) -> tokio::task::JoinHandle<()> {
        let limiter = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // First tick completes immediately; skip it
            ticker.tick().await;
            loop {
                ticker.tick().await;
                limiter.sweep();
            }
        })
    }

    #[cfg(test)]
    fn tracked_identities(&self) -> usize {
        self.inner.windows.len()
    }
}
