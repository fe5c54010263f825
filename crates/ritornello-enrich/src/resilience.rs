//! Resilience primitives for external catalog calls.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Per-source rate limiter enforcing a minimum interval between calls.
///
/// Callers `acquire()` before each request; the limiter sleeps until
/// at least `min_interval` has elapsed since the previous acquisition.
/// Cloning shares the limiter, so one source's budget is enforced
/// across every client handle.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    last: Arc<Mutex<Option<Instant>>>,
    min_interval: Duration,
}

impl RateLimiter {
    /// Allow at most `requests_per_second` requests per second.
    #[must_use]
    pub fn new(requests_per_second: u32) -> Self {
        Self {
            last: Arc::new(Mutex::new(None)),
            min_interval: Duration::from_millis(1000 / u64::from(requests_per_second.max(1))),
        }
    }

    /// Waits until the next request is allowed to start.
    pub async fn acquire(&self) {
        let mut last = self.last.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
