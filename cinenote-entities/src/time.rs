use std::fmt;

use time::OffsetDateTime;

/// Unix timestamp with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(i64);

impl TimestampMs {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    pub const fn into_milliseconds(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for TimestampMs {
    fn from(from: OffsetDateTime) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let millis = (from.unix_timestamp_nanos() / 1_000_000) as i64;
        Self(millis)
    }
}

impl TryFrom<TimestampMs> for OffsetDateTime {
    type Error = time::error::ComponentRange;
    fn try_from(from: TimestampMs) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match OffsetDateTime::try_from(*self) {
            Ok(dt) => write!(f, "{dt}"),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}
