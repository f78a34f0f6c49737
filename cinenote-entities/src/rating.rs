use std::fmt;

use thiserror::Error;

/// Number of stars a visitor gives a movie.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Rating value {0} is not within {min}..={max}", min = RatingValue::min(), max = RatingValue::max())]
pub struct RatingValueOutOfRange(pub i64);

impl RatingValue {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// All valid values in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::min().0..=Self::max().0).map(Self)
    }
}

impl Default for RatingValue {
    fn default() -> Self {
        Self::min()
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = RatingValueOutOfRange;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        u8::try_from(from)
            .ok()
            .map(Self)
            .filter(|v| v.is_valid())
            .ok_or(RatingValueOutOfRange(from))
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for i64 {
    fn from(from: RatingValue) -> Self {
        i64::from(from.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_values_within_range() {
        for v in 1..=5_i64 {
            assert_eq!(i64::from(RatingValue::try_from(v).unwrap()), v);
        }
    }

    #[test]
    fn reject_values_outside_range() {
        assert_eq!(RatingValue::try_from(0_i64), Err(RatingValueOutOfRange(0)));
        assert_eq!(RatingValue::try_from(6_i64), Err(RatingValueOutOfRange(6)));
        assert_eq!(RatingValue::try_from(-1_i64), Err(RatingValueOutOfRange(-1)));
        assert_eq!(
            RatingValue::try_from(i64::from(u8::MAX) + 2),
            Err(RatingValueOutOfRange(257))
        );
    }

    #[test]
    fn all_values() {
        let all: Vec<u8> = RatingValue::all().map(u8::from).collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn out_of_range_message() {
        assert_eq!(
            RatingValueOutOfRange(7).to_string(),
            "Rating value 7 is not within 1..=5"
        );
    }
}
