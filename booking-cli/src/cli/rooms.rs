use clap::{Parser, Subcommand};

use crate::{
    core::{booking::Booking, room::RoomRef},
    prelude::*,
    tables::build_rooms_table,
};

#[derive(Parser)]
pub struct RoomsArgs {
    #[command(subcommand)]
    command: RoomsCommand,
}

impl RoomsArgs {
    pub fn run(self, booking: &Booking) -> Result {
        match self.command {
            RoomsCommand::Add { reference } => {
                let room = booking.create_room(reference)?;
                println!("{}", build_rooms_table(&[room]));
            }
            RoomsCommand::List => {
                println!("{}", build_rooms_table(&booking.list_rooms()?));
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
enum RoomsCommand {
    /// Register a room.
    Add {
        /// Room reference, case-insensitive.
        reference: RoomRef,
    },

    /// List the registered rooms.
    List,
}
