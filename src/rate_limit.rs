//! Per-key fixed-window rate limiter.
//!
//! Each key gets a counter that resets once `window` has elapsed since the
//! first hit of the current window. At most `max_requests` hits are allowed
//! per window. State lives in memory only; expired windows are dropped
//! every `prune_every` checks, or on demand with
//! [`FixedWindowLimiter::prune`].

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

/// Outcome of one [`FixedWindowLimiter::check`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateDecision {
    pub allowed: bool,
    /// Hits left in the current window after this one.
    pub remaining: u32,
    /// Time until the current window resets.
    pub reset_after: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    hits: u32,
}

/// Default number of checks between automatic prunes.
pub const DEFAULT_PRUNE_EVERY: u64 = 1024;

#[derive(Debug, Default)]
struct State {
    windows: HashMap<String, Window>,
    checks: u64,
}

impl State {
    fn prune(&mut self, now: Instant, window: Duration) -> usize {
        let before = self.windows.len();
        self.windows
            .retain(|_, w| now.saturating_duration_since(w.started) < window);
        before - self.windows.len()
    }
}

pub struct FixedWindowLimiter {
    max_requests: u32,
    window: Duration,
    prune_every: u64,
    state: Mutex<State>,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            prune_every: DEFAULT_PRUNE_EVERY,
            state: Mutex::new(State::default()),
        }
    }

    /// Prune expired windows every `checks` calls to [`Self::check_at`].
    /// Zero disables automatic pruning.
    #[must_use]
    pub const fn with_prune_every(mut self, checks: u64) -> Self {
        self.prune_every = checks;
        self
    }

    pub const fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Record a hit for `key` now.
    pub fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now())
    }

    /// Record a hit for `key` at `now`.
    pub fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        let mut state = self.state.lock();
        state.checks += 1;
        if self.prune_every > 0 && state.checks % self.prune_every == 0 {
            let removed = state.prune(now, self.window);
            debug!(target: "lexwatch::rate_limit", removed, "pruned expired windows");
        }

        let entry = state.windows.entry(key.to_string()).or_insert(Window {
            started: now,
            hits: 0,
        });

        let elapsed = now.saturating_duration_since(entry.started);
        if elapsed >= self.window {
            entry.started = now;
            entry.hits = 0;
        }

        let reset_after = self
            .window
            .saturating_sub(now.saturating_duration_since(entry.started));

        if entry.hits >= self.max_requests {
            debug!(target: "lexwatch::rate_limit", key, hits = entry.hits, "request rejected");
            return RateDecision {
                allowed: false,
                remaining: 0,
                reset_after,
            };
        }

        entry.hits += 1;
        RateDecision {
            allowed: true,
            remaining: self.max_requests - entry.hits,
            reset_after,
        }
    }

    /// Drop windows that have expired at `now`. Returns how many were removed.
    pub fn prune(&self, now: Instant) -> usize {
        self.state.lock().prune(now, self.window)
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.state.lock().windows.len()
    }
}
