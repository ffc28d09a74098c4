use std::str::FromStr;

use bon::bon;
use booking_timeset::TimeSpan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::{NoContext, Timestamp, Uuid};

use crate::{
    core::{error::BookingError, room::RoomRef},
    prelude::*,
};

/// Time-ordered reservation identifier.
///
/// The embedded timestamp is the reservation start rather than the creation time,
/// so the identifiers of a room sort like its reservations.
#[must_use]
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    /// Instants before the Unix epoch are clamped to it.
    pub fn starting_at(from: DateTime<Utc>) -> Self {
        let (seconds, nanos) = u64::try_from(from.timestamp())
            .map_or((0, 0), |seconds| (seconds, from.timestamp_subsec_nanos()));
        Self(Uuid::new_v7(Timestamp::from_unix(NoContext, seconds, nanos)))
    }
}

/// Whoever makes the reservation.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct UserRef(String);

impl UserRef {
    pub fn new(raw: &str) -> Result<Self, BookingError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BookingError::validation("userRef", "a requester is required"));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl FromStr for UserRef {
    type Err = BookingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl TryFrom<String> for UserRef {
    type Error = BookingError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<UserRef> for String {
    fn from(user: UserRef) -> Self {
        user.0
    }
}

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,

    /// Inclusive, aligned to the precision.
    pub from: DateTime<Utc>,

    /// Exclusive, aligned to the precision.
    pub to: DateTime<Utc>,

    pub room_ref: RoomRef,
    pub user_ref: UserRef,
}

#[bon]
impl Reservation {
    /// New reservation with a fresh identifier.
    #[builder]
    pub fn new(room_ref: RoomRef, span: TimeSpan, user_ref: UserRef) -> Self {
        Self {
            id: ReservationId::starting_at(span.start()),
            from: span.start(),
            to: span.end(),
            room_ref,
            user_ref,
        }
    }
}

impl Reservation {
    pub fn span(&self) -> Result<TimeSpan> {
        TimeSpan::try_new(self.from, self.to)
            .with_context(|| format!("reservation `{}` has an invalid interval", self.id))
    }
}
