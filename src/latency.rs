//! Artificial latency for demo call sites.
//!
//! When the planner runs without a backend, the presentation layer still
//! expects a request to take a moment. This lives outside the estimator,
//! which never sleeps.

use std::time::Duration;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self {
            min_ms: 500,
            max_ms: 1500,
        }
    }
}

impl LatencyRange {
    /// Slower range used before canned chat answers.
    pub const CHAT: LatencyRange = LatencyRange {
        min_ms: 800,
        max_ms: 2000,
    };

    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Uniform draw from `[min_ms, max_ms)`; a collapsed or inverted range
    /// yields `min_ms`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.gen_range(self.min_ms..self.max_ms))
    }

    /// Block the current thread for a sampled delay and return it.
    pub fn wait<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let delay = self.sample(rng);
        tracing::trace!(delay_ms = delay.as_millis() as u64, "simulating latency");
        std::thread::sleep(delay);
        delay
    }
}
