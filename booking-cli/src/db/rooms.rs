use crate::{core::room::Room, db::Document};

impl Document for Room {
    const TABLE_NAME: &str = "rooms";
}
