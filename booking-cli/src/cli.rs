mod cancel;
mod db;
mod free;
mod list;
mod policy;
mod reserve;
mod rooms;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        cancel::CancelArgs,
        db::DbArgs,
        free::FreeArgs,
        list::ListArgs,
        policy::PolicyArgs,
        reserve::ReserveArgs,
        rooms::RoomsArgs,
    },
    core::booking::Booking,
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    db: DbArgs,

    #[clap(flatten)]
    policy: PolicyArgs,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        let booking = Booking::builder().db(self.db.open()?).policy(self.policy.policy()?).build();
        match self.command {
            Command::Reserve(args) => args.run(&booking),
            Command::Cancel(args) => args.run(&booking),
            Command::Free(args) => args.run(&booking),
            Command::List(args) => args.run(&booking),
            Command::Rooms(args) => args.run(&booking),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Reserve a room, unless the interval overlaps another reservation.
    Reserve(ReserveArgs),

    /// Cancel a reservation.
    Cancel(CancelArgs),

    /// Show the free slots of a room.
    Free(FreeArgs),

    /// List the reservations of a room.
    List(ListArgs),

    /// Register and list rooms.
    Rooms(RoomsArgs),
}
