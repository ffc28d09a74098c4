use clap::Parser;

use crate::{
    core::{booking::Booking, reservation::ReservationId, room::RoomRef},
    prelude::*,
};

#[derive(Parser)]
pub struct CancelArgs {
    /// Room reference, case-insensitive.
    #[clap(long)]
    room: RoomRef,

    /// Reservation identifier.
    #[clap(long)]
    id: ReservationId,
}

impl CancelArgs {
    pub fn run(self, booking: &Booking) -> Result {
        booking.cancel_reservation(&self.room, self.id)
    }
}
