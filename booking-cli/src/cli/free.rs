use chrono::{DateTime, TimeDelta, Utc};
use clap::Parser;

use crate::{
    core::{availability::AvailabilityQuery, booking::Booking, room::RoomRef},
    prelude::*,
    tables::build_slots_table,
};

#[derive(Parser)]
pub struct FreeArgs {
    /// Room reference, case-insensitive.
    #[clap(long)]
    room: RoomRef,

    /// Window start, RFC 3339.
    #[clap(long)]
    from: DateTime<Utc>,

    /// Window end, RFC 3339.
    #[clap(long)]
    to: DateTime<Utc>,

    /// Desired slot duration in minutes.
    ///
    /// Only reported for now: the slots are filtered by the policy minimum duration.
    #[clap(long = "duration")]
    duration_minutes: Option<u32>,
}

impl FreeArgs {
    pub fn run(self, booking: &Booking) -> Result {
        let query = AvailabilityQuery {
            from: self.from,
            to: self.to,
            duration: self.duration_minutes.map(|minutes| TimeDelta::minutes(minutes.into())),
        };
        let slots = booking.free_ranges(&self.room, &query)?;
        println!("{}", build_slots_table(&slots));
        Ok(())
    }
}
