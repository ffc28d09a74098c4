use chrono::{DateTime, DurationRound, RoundingError, TimeDelta, Utc};

use crate::span::Span;

/// Span of UTC instants.
pub type TimeSpan = Span<DateTime<Utc>>;

impl TimeSpan {
    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.length()
    }

    /// Widen the span outwards to the precision boundaries.
    ///
    /// ```text
    ///       [=====)
    /// |     :     :    |
    /// [================)
    /// ```
    pub fn align(self, precision: TimeDelta) -> Result<Self, RoundingError> {
        Ok(Self { start: self.start.floor(precision)?, end: self.end.ceil(precision)? })
    }
}

/// Rounding of an instant to a precision boundary.
///
/// Both directions are idempotent: an aligned instant is left as is.
pub trait Align: Sized {
    fn floor(self, precision: TimeDelta) -> Result<Self, RoundingError>;

    fn ceil(self, precision: TimeDelta) -> Result<Self, RoundingError>;
}

impl Align for DateTime<Utc> {
    fn floor(self, precision: TimeDelta) -> Result<Self, RoundingError> {
        self.duration_trunc(precision)
    }

    fn ceil(self, precision: TimeDelta) -> Result<Self, RoundingError> {
        let floor = self.floor(precision)?;
        if floor == self {
            Ok(self)
        } else {
            floor.checked_add_signed(precision).ok_or(RoundingError::TimestampExceedsLimit)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 5, 17, hour, minute, 0).unwrap()
    }

    #[test]
    fn floor_and_ceil_ok() {
        let hour = TimeDelta::hours(1);
        assert_eq!(at(12, 10).floor(hour).unwrap(), at(12, 0));
        assert_eq!(at(12, 10).ceil(hour).unwrap(), at(13, 0));
        assert_eq!(at(12, 0).floor(hour).unwrap(), at(12, 0));
        assert_eq!(at(12, 0).ceil(hour).unwrap(), at(12, 0));
        assert_eq!(at(12, 10).ceil(TimeDelta::minutes(15)).unwrap(), at(12, 15));
    }

    #[test]
    fn align_ok() {
        let hour = TimeDelta::hours(1);
        let span = TimeSpan::new(at(12, 10), at(12, 50)).unwrap();
        let aligned = span.align(hour).unwrap();
        assert_eq!(aligned, TimeSpan::new(at(12, 0), at(13, 0)).unwrap());
        assert_eq!(aligned.duration(), hour);
    }

    #[test]
    fn align_is_idempotent() {
        let precision = TimeDelta::minutes(30);
        for (from, to) in [((9, 5), (9, 20)), ((10, 0), (11, 0)), ((23, 31), (23, 59))] {
            let span = TimeSpan::new(at(from.0, from.1), at(to.0, to.1)).unwrap();
            let once = span.align(precision).unwrap();
            assert_eq!(once.align(precision).unwrap(), once);
        }
    }
}
