// File: crates/progress-core/src/clock.rs
// Summary: Time source for observation timestamps and chart file names.

use chrono::{DateTime, FixedOffset, Offset, SubsecRound, Utc};

use crate::error::{ProgressError, Result};

/// Offset of the local clock when none is configured (UTC+9).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock pinned to a fixed UTC offset, independent of the host time zone.
#[derive(Clone, Copy, Debug)]
pub struct FixedOffsetClock {
    offset: FixedOffset,
}

impl FixedOffsetClock {
    pub fn from_hours(hours: i32) -> Result<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
            .ok_or_else(|| ProgressError::Config(format!("UTC offset {hours}h is out of range")))
    }

    pub fn offset(&self) -> FixedOffset { self.offset }
}

impl Default for FixedOffsetClock {
    fn default() -> Self {
        let offset = FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600).unwrap_or_else(|| Utc.fix());
        Self { offset }
    }
}

impl Clock for FixedOffsetClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Always reports the same instant. Useful for replaying imports and in tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> { self.0 }
}

/// Current time truncated to the precision the log stores.
pub(crate) fn observation_time(clock: &dyn Clock) -> DateTime<FixedOffset> {
    clock.now().trunc_subsecs(6)
}
