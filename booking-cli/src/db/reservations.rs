use serde::{Deserialize, Serialize};

use crate::{core::reservation::Reservation, db::Document};

/// All the current reservations of a single room, keyed by the room reference.
///
/// A room which has had reservations keeps its entry even when all of them are cancelled.
#[must_use]
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct RoomReservations(Vec<Reservation>);

impl Document for RoomReservations {
    const TABLE_NAME: &str = "reservations";
}
