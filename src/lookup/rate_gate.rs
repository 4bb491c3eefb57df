//! Single-permit rate gate for the MusicBrainz client.
//!
//! MusicBrainz allows one request per second per client. The gate is a token
//! bucket holding one permit:
//! - acquiring takes the permit and waits until the bucket has refilled
//! - only one permit holder exists at a time, so requests never overlap
//! - dropping the permit schedules the refill `interval` after release
//!
//! The refill is a deadline stored in the bucket rather than a timer task, so
//! nothing runs in the background between requests.

use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;

/// Default cool-down between MusicBrainz requests
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Token bucket with a single permit and a scheduled refill
#[derive(Debug)]
pub struct RateGate {
    /// When the permit becomes available again (`None` = available now)
    refill_at: Mutex<Option<Instant>>,
    interval: Duration,
}

/// Held for the duration of one request. Dropping it starts the cool-down.
#[derive(Debug)]
pub struct RatePermit<'a> {
    refill_at: MutexGuard<'a, Option<Instant>>,
    interval: Duration,
}

impl RateGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            refill_at: Mutex::new(None),
            interval,
        }
    }

    /// Configured cool-down
    #[cfg(test)]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for the permit.
    ///
    /// Callers queue on the mutex in FIFO order, then sleep until the refill
    /// deadline left by the previous holder has passed.
    pub async fn acquire(&self) -> RatePermit<'_> {
        let refill_at = self.refill_at.lock().await;

        if let Some(deadline) = *refill_at {
            let now = Instant::now();
            if deadline > now {
                tracing::trace!("Rate gate: waiting {:?}", deadline - now);
                tokio::time::sleep_until(deadline).await;
            }
        }

        tracing::debug!("Acquired MusicBrainz rate gate");
        RatePermit {
            refill_at,
            interval: self.interval,
        }
    }
}

#[cfg(test)]
impl Default for RateGate {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Drop for RatePermit<'_> {
    fn drop(&mut self) {
        *self.refill_at = Some(Instant::now() + self.interval);
        tracing::debug!("Released MusicBrainz rate gate, refill in {:?}", self.interval);
    }
}
