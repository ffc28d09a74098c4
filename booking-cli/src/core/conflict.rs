use booking_timeset::{DisjointSet, IntervalSet, TimeSpan};
use chrono::{DateTime, Utc};

use crate::{
    core::{error::BookingError, reservation::Reservation, room::RoomRef},
    prelude::*,
};

/// Time taken by the reservations.
pub fn busy_set(reservations: &[Reservation]) -> Result<DisjointSet<DateTime<Utc>>> {
    reservations.iter().map(Reservation::span).collect()
}

/// Reject the candidate if any of it is already taken.
pub fn ensure_free(
    room: &RoomRef,
    busy: &DisjointSet<DateTime<Utc>>,
    candidate: TimeSpan,
) -> Result<(), BookingError> {
    match busy.between(candidate).next() {
        Some(taken) => Err(BookingError::Conflict { room: room.clone(), interval: taken }),
        None => Ok(()),
    }
}
