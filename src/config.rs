use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default total budget for a lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default spacing between probe attempts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Default budget for waiting on a desktop window to appear.
pub const DEFAULT_WINDOW_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout and poll-interval configuration for a single wait.
///
/// Every waiting operation takes one of these; the high-level bundles carry
/// a default that individual calls can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Total wall-clock budget for the wait.
    pub timeout: Duration,
    /// Sleep between probe attempts.
    pub interval: Duration,
}

impl WaitConfig {
    #[must_use]
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// A wait with the given budget and the default poll interval.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_INTERVAL)
    }

    /// A zero-budget wait: the probe still runs once before giving up.
    #[must_use]
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, DEFAULT_INTERVAL)
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_INTERVAL)
    }
}
