use clap::Parser;

use crate::{
    core::{booking::Booking, room::RoomRef},
    prelude::*,
    tables::build_reservations_table,
};

#[derive(Parser)]
pub struct ListArgs {
    /// Room reference, case-insensitive.
    #[clap(long)]
    room: RoomRef,
}

impl ListArgs {
    pub fn run(self, booking: &Booking) -> Result {
        let reservations = booking.list_reservations(&self.room)?;
        println!("{}", build_reservations_table(&reservations));
        Ok(())
    }
}
