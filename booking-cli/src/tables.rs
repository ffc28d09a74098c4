use chrono::{DateTime, Utc};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{availability::TimeInterval, reservation::Reservation, room::Room};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(header);
    table
}

fn date_cell(instant: DateTime<Utc>) -> Cell {
    Cell::new(instant.format("%b %d")).add_attribute(Attribute::Dim)
}

fn duration_cell(interval: TimeInterval) -> Cell {
    let text = interval
        .duration()
        .to_std()
        .map_or_else(|_| "-".to_owned(), |duration| humantime::format_duration(duration).to_string());
    Cell::new(text).set_alignment(CellAlignment::Right)
}

pub fn build_reservations_table(reservations: &[Reservation]) -> Table {
    let mut table = new_table(vec!["ID", "Room", "Date", "From", "To", "Duration", "User"]);
    for reservation in reservations {
        let interval = TimeInterval::new(reservation.from, reservation.to);
        table.add_row(vec![
            Cell::new(reservation.id).add_attribute(Attribute::Dim),
            Cell::new(&reservation.room_ref).fg(Color::Cyan),
            date_cell(reservation.from),
            Cell::new(reservation.from.format("%H:%M")),
            Cell::new(reservation.to.format("%H:%M")).add_attribute(Attribute::Dim),
            duration_cell(interval),
            Cell::new(&reservation.user_ref),
        ]);
    }
    table
}

pub fn build_slots_table(slots: &[TimeInterval]) -> Table {
    let mut table = new_table(vec!["Date", "From", "To", "Duration"]);
    for slot in slots {
        table.add_row(vec![
            date_cell(slot.from),
            Cell::new(slot.from.format("%H:%M")).fg(Color::Green),
            Cell::new(slot.to.format("%b %d %H:%M")).add_attribute(Attribute::Dim),
            duration_cell(*slot),
        ]);
    }
    table
}

pub fn build_rooms_table(rooms: &[Room]) -> Table {
    let mut table = new_table(vec!["Room"]);
    for room in rooms {
        table.add_row(vec![Cell::new(&room.reference).fg(Color::Cyan)]);
    }
    table
}
