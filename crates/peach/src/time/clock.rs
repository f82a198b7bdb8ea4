//! Clock capability for obtaining "now".
//!
//! Time variants never read the system clock themselves; they ask a
//! [`Clock`], so tests swap in [`FixedClock`] or [`OffsetClock`] for
//! deterministic results. All conversions are UTC.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::time::calendar::Timestamp;

pub trait Clock {
    /// Seconds since the unix epoch.
    fn unix_time(&self) -> i64;

    /// Current time as a calendar `Timestamp` (UTC).
    fn timestamp(&self) -> Timestamp {
        timestamp_from_unix(self.unix_time())
    }
}

/// Converts epoch seconds to calendar fields (UTC).
pub fn timestamp_from_unix(unix_time: i64) -> Timestamp {
    let utc: DateTime<Utc> =
        DateTime::from_timestamp(unix_time, 0).unwrap_or(DateTime::UNIX_EPOCH);
    Timestamp::new(
        i64::from(utc.year()),
        i64::from(utc.month()),
        i64::from(utc.day()),
        i64::from(utc.hour()),
        i64::from(utc.minute()),
        i64::from(utc.second()),
    )
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_time(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    unix_time: i64,
}

impl FixedClock {
    pub fn new(unix_time: i64) -> FixedClock {
        FixedClock { unix_time }
    }
}

impl Clock for FixedClock {
    fn unix_time(&self) -> i64 {
        self.unix_time
    }
}

/// A clock shifted a fixed number of seconds from a base clock.
#[derive(Debug, Clone, Copy)]
pub struct OffsetClock<C = SystemClock> {
    offset_secs: i64,
    base: C,
}

impl OffsetClock<SystemClock> {
    pub fn new(offset_secs: i64) -> OffsetClock<SystemClock> {
        OffsetClock {
            offset_secs,
            base: SystemClock,
        }
    }
}

impl<C: Clock> OffsetClock<C> {
    pub fn with_base(offset_secs: i64, base: C) -> OffsetClock<C> {
        OffsetClock { offset_secs, base }
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    fn unix_time(&self) -> i64 {
        self.base.unix_time() + self.offset_secs
    }
}
