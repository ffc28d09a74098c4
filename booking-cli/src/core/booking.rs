use bon::Builder;
use itertools::Itertools;

use crate::{
    core::{
        availability::{self, AvailabilityQuery, TimeInterval},
        conflict,
        error::BookingError,
        policy::Policy,
        reservation::{Reservation, ReservationId, UserRef},
        room::{Room, RoomRef},
    },
    db::{Db, reservations::RoomReservations},
    prelude::*,
};

/// Room reservations on top of the transactional store.
///
/// Every decision is taken inside the transaction that performs the write, so concurrent
/// requests for the same room cannot both pass the conflict check.
#[must_use]
#[derive(Clone, Builder)]
pub struct Booking {
    db: Db,

    #[builder(default)]
    policy: Policy,
}

impl Booking {
    #[instrument(skip_all, fields(room = %room, user = %user))]
    pub fn reserve_room(
        &self,
        room: &RoomRef,
        interval: TimeInterval,
        user: &UserRef,
    ) -> Result<Reservation> {
        // Empty raw requests are rejected before rounding could widen them to a whole slot.
        let candidate = self.policy.align(interval.try_into_span()?)?;
        let reservation = Reservation::builder()
            .room_ref(room.clone())
            .span(candidate)
            .user_ref(user.clone())
            .build();
        self.db.write(|writer| {
            let mut reservations =
                writer.get::<RoomReservations>(room.as_str())?.unwrap_or_default();
            conflict::ensure_free(room, &conflict::busy_set(&reservations)?, candidate)?;
            reservations.push(reservation.clone());
            writer.insert(room.as_str(), &reservations)
        })?;
        info!(id = %reservation.id, %candidate, "reserved");
        Ok(reservation)
    }

    #[instrument(skip_all, fields(room = %room, id = %id))]
    pub fn cancel_reservation(&self, room: &RoomRef, id: ReservationId) -> Result {
        let not_found = || BookingError::not_found(format!("reservation `{id}` in room `{room}`"));
        let cancelled = self.db.write(|writer| {
            let mut reservations =
                writer.get::<RoomReservations>(room.as_str())?.ok_or_else(not_found)?;
            let index = reservations
                .iter()
                .position(|reservation| reservation.id == id)
                .ok_or_else(not_found)?;
            let cancelled = reservations.remove(index);
            writer.insert(room.as_str(), &reservations)?;
            Ok(cancelled)
        })?;
        info!(from = %cancelled.from, to = %cancelled.to, "cancelled");
        Ok(())
    }

    /// Free slots of the room within the queried window.
    ///
    /// A room without any reservation history is not found. A room whose reservations were
    /// all cancelled is free for the whole window.
    #[instrument(
        skip_all,
        fields(room = %room, from = %query.from, to = %query.to, duration = ?query.duration)
    )]
    pub fn free_ranges(
        &self,
        room: &RoomRef,
        query: &AvailabilityQuery,
    ) -> Result<Vec<TimeInterval>> {
        let Some(window) = query.window()? else {
            return Ok(Vec::new());
        };
        let reservations = self
            .db
            .read(|reader| reader.get::<RoomReservations>(room.as_str()))?
            .ok_or_else(|| BookingError::not_found(format!("room `{room}` reservations")))?;
        let slots = availability::free_ranges(window, &reservations, self.policy.min_duration)?;
        info!(n_slots = slots.len(), "computed the free ranges");
        Ok(slots)
    }

    /// Reservations of the room, ascending by start.
    #[instrument(skip_all, fields(room = %room))]
    pub fn list_reservations(&self, room: &RoomRef) -> Result<Vec<Reservation>> {
        let reservations = self
            .db
            .read(|reader| reader.get::<RoomReservations>(room.as_str()))?
            .ok_or_else(|| BookingError::not_found(format!("room `{room}` reservations")))?;
        Ok(reservations
            .iter()
            .cloned()
            .sorted_by_key(|reservation| (reservation.from, reservation.id))
            .collect())
    }

    #[instrument(skip_all, fields(room = %reference))]
    pub fn create_room(&self, reference: RoomRef) -> Result<Room> {
        let room = Room { reference };
        self.db.write(|writer| writer.insert(room.reference.as_str(), &room))?;
        info!("created");
        Ok(room)
    }

    pub fn list_rooms(&self) -> Result<Vec<Room>> {
        self.db.read(|reader| reader.all::<Room>())
    }
}
