use chrono::{DateTime, TimeDelta, Utc};
use clap::{Args, Parser};

use crate::{
    core::{
        availability::TimeInterval,
        booking::Booking,
        reservation::UserRef,
        room::RoomRef,
    },
    prelude::*,
    tables::build_reservations_table,
};

#[derive(Parser)]
pub struct ReserveArgs {
    /// Room reference, case-insensitive.
    #[clap(long)]
    room: RoomRef,

    /// Start instant, RFC 3339. Rounded down to the precision.
    #[clap(long)]
    from: DateTime<Utc>,

    #[clap(flatten)]
    end: EndArgs,

    /// Who makes the reservation.
    #[clap(long, env = "BOOKING_USER")]
    user: UserRef,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct EndArgs {
    /// End instant, RFC 3339. Rounded up to the precision.
    #[clap(long)]
    to: Option<DateTime<Utc>>,

    /// Number of hours since the start, instead of the end instant.
    #[clap(long)]
    hours: Option<u32>,
}

impl ReserveArgs {
    pub fn run(self, booking: &Booking) -> Result {
        let reservation = booking.reserve_room(&self.room, self.interval()?, &self.user)?;
        println!("{}", build_reservations_table(&[reservation]));
        Ok(())
    }

    fn interval(&self) -> Result<TimeInterval> {
        let to = match (self.end.to, self.end.hours) {
            (Some(to), _) => to,
            (None, Some(hours)) => self
                .from
                .checked_add_signed(TimeDelta::hours(hours.into()))
                .context("the end is out of range")?,
            (None, None) => bail!("either `--to` or `--hours` is required"),
        };
        Ok(TimeInterval::new(self.from, to))
    }
}
