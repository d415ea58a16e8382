//! Connection Lifecycle Types
//!
//! Shared vocabulary for the clients that depend on a live transport connection
//! (result cache, event publisher, event subscriber). Each client owns its own
//! connection and runs the same connect-retry loop at startup; these types make
//! the outcome of that loop explicit instead of leaving it in ambient flags.

use std::time::Duration;

/// Fixed delay between connection attempts.
pub const CONNECT_BACKOFF: Duration = Duration::from_secs(3);

/// Outcome of a connect-retry loop.
///
/// `Degraded` means the retry limit was exhausted and the process keeps running
/// without that connection: reads return empty results, writes are logged and
/// skipped. A process never terminates itself over transport unavailability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportStatus {
    Connected,
    Degraded,
}

/// Connect-retry settings.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum connection attempts. `0` retries forever.
    pub limit: u32,
    /// Delay between attempts.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            backoff: CONNECT_BACKOFF,
        }
    }

    /// True once `attempt` connection attempts have failed and no more should
    /// be made.
    pub fn exhausted(&self, attempt: u32) -> bool {
        self.limit > 0 && attempt >= self.limit
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(0)
    }
}
