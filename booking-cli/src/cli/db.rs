use std::path::PathBuf;

use clap::Parser;

use crate::{db::Db, prelude::*};

#[derive(Parser)]
pub struct DbArgs {
    /// Database file, created when missing.
    #[clap(
        long = "database",
        env = "BOOKING_DATABASE",
        default_value = "booking.redb",
        global = true
    )]
    path: PathBuf,
}

impl DbArgs {
    pub fn open(&self) -> Result<Db> {
        Db::open(&self.path)
    }
}
