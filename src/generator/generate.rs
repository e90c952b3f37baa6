//! ID generation logic

use chrono::{DateTime, Utc};

use super::time::unix_time_secs;
use super::Generator;
use crate::id::Xid;

impl Generator {
    /// Generate a new Xid stamped with the current time
    #[inline]
    pub fn generate(&self) -> Xid {
        self.generate_at(unix_time_secs())
    }

    /// Generate a new Xid with a caller-supplied timestamp
    ///
    /// Still consumes a counter value, so results stay unique within the process.
    #[inline]
    pub fn generate_at(&self, time: u32) -> Xid {
        let counter = self.counter.next();
        Xid::from_parts(time, self.machine_id, self.process_id, counter)
    }

    /// Generate a new Xid stamped with `at`, truncated to whole seconds
    ///
    /// The seconds field is clamped to the u32 range: datetimes before the
    /// epoch stamp 0 and datetimes past 2106-02-07 stamp `u32::MAX`.
    pub fn generate_at_datetime(&self, at: DateTime<Utc>) -> Xid {
        let secs = u32::try_from(at.timestamp().max(0)).unwrap_or(u32::MAX);
        self.generate_at(secs)
    }
}
