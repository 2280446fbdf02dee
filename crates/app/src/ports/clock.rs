//! Clock port, so status derivation can be pinned in tests.

use chrono::FixedOffset;
use countdash_domain::time::{Timestamp, local_offset, now};

/// Source of "now" and of the viewer's time zone.
pub trait Clock {
    fn now(&self) -> Timestamp;

    /// Offset applied to naive backend timestamps.
    fn local_offset(&self) -> FixedOffset;
}

/// Wall-clock time, read in the host's local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        now()
    }

    fn local_offset(&self) -> FixedOffset {
        local_offset()
    }
}
