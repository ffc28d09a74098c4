#![allow(clippy::doc_markdown)]
#![doc = include_str!("../../README.md")]

mod cli;
mod core;
mod db;
mod prelude;
mod tables;

use std::process::ExitCode;

use clap::{Parser, crate_version};

use crate::{cli::Args, core::error::BookingError, prelude::*};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().run() {
        Ok(()) => {
            info!("done!");
            ExitCode::SUCCESS
        }
        Err(error) => {
            if let Some(booking_error) = error.downcast_ref::<BookingError>() {
                warn!("{error:#}");
                booking_error.exit_code()
            } else {
                error!("{error:#}");
                ExitCode::FAILURE
            }
        }
    }
}
