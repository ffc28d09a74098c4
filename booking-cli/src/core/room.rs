use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::BookingError;

/// Normalized room reference: trimmed and upper-cased, never empty.
#[must_use]
#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct RoomRef(String);

impl RoomRef {
    pub fn new(raw: &str) -> Result<Self, BookingError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(BookingError::validation("roomRef", "a room reference is required"));
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RoomRef {
    type Err = BookingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl TryFrom<String> for RoomRef {
    type Error = BookingError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<RoomRef> for String {
    fn from(room: RoomRef) -> Self {
        room.0
    }
}

/// Registered room.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "ref")]
    pub reference: RoomRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_ok() {
        assert_eq!(RoomRef::new(" c01 ").unwrap(), RoomRef::new("C01").unwrap());
        assert_eq!(RoomRef::new("c01\n").unwrap().as_str(), "C01");
    }

    #[test]
    fn empty_is_rejected() {
        for raw in ["", "   "] {
            assert!(matches!(
                RoomRef::new(raw),
                Err(BookingError::Validation { field: "roomRef", .. })
            ));
        }
    }

    #[test]
    fn serde_ok() {
        let room = Room { reference: RoomRef::new("c02").unwrap() };
        let json = serde_json::to_string(&room).unwrap();
        assert_eq!(json, r#"{"ref":"C02"}"#);
        let parsed: Room = serde_json::from_str(r#"{"ref":" c02"}"#).unwrap();
        assert_eq!(parsed, room);
        assert!(serde_json::from_str::<Room>(r#"{"ref":""}"#).is_err());
    }
}
