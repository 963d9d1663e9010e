use std::time::Duration;

use tokio::time::sleep;

/// Fixed-delay rate limiter for the account data API.
///
/// Awaited once after every outbound call, success or failure. The pause
/// is constant; it does not adapt to response latency or rate-limit
/// signals.
#[derive(Debug, Clone)]
pub struct Throttle {
    delay: Duration
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A throttle that never pauses, for tests and offline replays.
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}
