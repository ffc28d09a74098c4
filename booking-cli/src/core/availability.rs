use booking_timeset::{DisjointSet, ImmutableSet, IntervalSet, MutableIntervalSet, TimeSpan};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    core::{error::BookingError, reservation::Reservation},
    prelude::*,
};

/// Unvalidated pair of instants: a requested interval, or a published free slot.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeInterval {
    pub const fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.to - self.from
    }

    pub fn try_into_span(self) -> Result<TimeSpan, BookingError> {
        TimeSpan::new(self.from, self.to).ok_or_else(|| {
            BookingError::validation("to", format!("`{}` is not after `{}`", self.to, self.from))
        })
    }
}

impl From<TimeSpan> for TimeInterval {
    fn from(span: TimeSpan) -> Self {
        Self::new(span.start(), span.end())
    }
}

/// Free time request for a single room.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct AvailabilityQuery {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,

    /// Requested slot duration, only reported for now.
    pub duration: Option<TimeDelta>,
}

impl AvailabilityQuery {
    /// Queried window, `None` when it is empty.
    pub fn window(&self) -> Result<Option<TimeSpan>, BookingError> {
        if self.to < self.from {
            return Err(BookingError::validation(
                "to",
                format!("`{}` is before `{}`", self.to, self.from),
            ));
        }
        Ok(TimeSpan::new(self.from, self.to))
    }
}

/// Time within the window not taken by any of the reservations.
pub fn free_time(
    window: TimeSpan,
    reservations: &[Reservation],
) -> Result<ImmutableSet<DateTime<Utc>>> {
    let mut free = DisjointSet::from(window);
    for reservation in reservations {
        free.remove(reservation.span()?);
    }
    Ok(free.freeze())
}

/// Free slots within the window, ascending, each lasting at least the minimum duration.
pub fn free_ranges(
    window: TimeSpan,
    reservations: &[Reservation],
    min_duration: TimeDelta,
) -> Result<Vec<TimeInterval>> {
    Ok(free_time(window, reservations)?
        .between(window)
        .filter(|slot| slot.duration() >= min_duration)
        .map(TimeInterval::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::core::{reservation::UserRef, room::RoomRef};

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 5, 17, hour, minute, 0).unwrap()
    }

    fn midnight() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 5, 18, 0, 0, 0).unwrap()
    }

    fn reservation(from: DateTime<Utc>, to: DateTime<Utc>) -> Reservation {
        Reservation::builder()
            .room_ref(RoomRef::new("C01").unwrap())
            .span(TimeSpan::new(from, to).unwrap())
            .user_ref(UserRef::new("alice").unwrap())
            .build()
    }

    #[test]
    fn splits_day_around_reservation() -> Result {
        let window = TimeSpan::new(at(0, 0), midnight()).unwrap();
        let slots = free_ranges(window, &[reservation(at(12, 0), at(13, 0))], TimeDelta::hours(1))?;
        assert_eq!(
            slots,
            [TimeInterval::new(at(0, 0), at(12, 0)), TimeInterval::new(at(13, 0), midnight())]
        );
        Ok(())
    }

    #[test]
    fn short_fragments_are_dropped() -> Result {
        let window = TimeSpan::new(at(0, 0), midnight()).unwrap();
        let reservations =
            [reservation(at(12, 0), at(13, 0)), reservation(at(23, 30), at(23, 45))];
        let slots = free_ranges(window, &reservations, TimeDelta::hours(1))?;
        assert_eq!(
            slots,
            [TimeInterval::new(at(0, 0), at(12, 0)), TimeInterval::new(at(13, 0), at(23, 30))]
        );

        let free = free_time(window, &reservations)?;
        assert!(!free.overlaps(TimeSpan::new(at(23, 30), at(23, 45)).unwrap()));
        assert!(free.contains(TimeSpan::new(at(23, 45), midnight()).unwrap()));
        Ok(())
    }

    #[test]
    fn no_reservations_yield_whole_window() -> Result {
        let window = TimeSpan::new(at(8, 0), at(18, 0)).unwrap();
        assert_eq!(free_ranges(window, &[], TimeDelta::hours(1))?, [TimeInterval::from(window)]);
        Ok(())
    }

    #[test]
    fn reservations_outside_window_are_ignored() -> Result {
        let window = TimeSpan::new(at(8, 0), at(12, 0)).unwrap();
        let reservations = [reservation(at(6, 0), at(9, 0)), reservation(at(12, 0), at(14, 0))];
        assert_eq!(
            free_ranges(window, &reservations, TimeDelta::hours(1))?,
            [TimeInterval::new(at(9, 0), at(12, 0))]
        );
        Ok(())
    }

    #[test]
    fn query_window_ok() {
        let query = AvailabilityQuery { from: at(10, 0), to: at(9, 0), duration: None };
        assert!(matches!(query.window(), Err(BookingError::Validation { field: "to", .. })));
        let query = AvailabilityQuery { from: at(10, 0), to: at(10, 0), duration: None };
        assert!(matches!(query.window(), Ok(None)));
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let interval = TimeInterval::new(at(13, 0), at(12, 0));
        assert!(matches!(interval.try_into_span(), Err(BookingError::Validation { .. })));
        assert_eq!(TimeInterval::new(at(12, 0), at(13, 0)).duration(), TimeDelta::hours(1));
    }
}
