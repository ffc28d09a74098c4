pub mod availability;
pub mod booking;
pub mod conflict;
pub mod error;
pub mod policy;
pub mod reservation;
pub mod room;
