//! Time keeping module for PineTime

use chrono::{DateTime, NaiveDateTime};
use embassy_time::{Duration, Instant};

use tickface::clock;

/// A wall clock reading paired with the monotonic instant it was taken at
struct TimeReference {
    /// Clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Create new time reference from a UTC epoch in seconds
    fn from_epoch(secs: i64) -> Self {
        Self {
            time: DateTime::from_timestamp(secs, 0)
                .map(|t| t.naive_utc())
                .unwrap_or(NaiveDateTime::UNIX_EPOCH),
            instant: Instant::now(),
        }
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(epoch_secs: i64) -> Self {
        Self {
            reference: TimeReference::from_epoch(epoch_secs),
        }
    }

    /// Get current time
    pub fn now(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference.time + chrono::Duration::microseconds(elapsed.as_micros() as i64)
    }

    /// Time left until the next minute starts
    pub fn until_next_minute(&self) -> Duration {
        Duration::from_micros(clock::micros_until_next_minute(self.now().time()))
    }
}
