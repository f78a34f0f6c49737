use std::{fmt, str::FromStr};

use crate::time::TimestampMs;

/// Identifier of a comment.
///
/// The value is derived from the creation time in milliseconds
/// and is strictly increasing within a single comment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentId(i64);

impl CommentId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// The id for a comment created at `now` that must
    /// be greater than `last`, even if the clock did not advance.
    pub fn next_after(last: Option<Self>, now: TimestampMs) -> Self {
        let candidate = now.into_milliseconds();
        match last {
            Some(Self(last)) if candidate <= last => Self(last + 1),
            _ => Self(candidate),
        }
    }
}

impl From<i64> for CommentId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<CommentId> for i64 {
    fn from(from: CommentId) -> Self {
        from.0
    }
}

impl FromStr for CommentId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
