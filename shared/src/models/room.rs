//! Room Model

use serde::{Deserialize, Serialize};

/// One of the six guesthouse units. Closed enumeration — the property
/// inventory is fixed and no room is created at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Room {
    #[serde(rename = "101")]
    R101,
    #[serde(rename = "102")]
    R102,
    #[serde(rename = "201")]
    R201,
    #[serde(rename = "202")]
    R202,
    #[serde(rename = "301")]
    R301,
    #[serde(rename = "302")]
    R302,
}

impl Room {
    /// All rooms in display order (ground floor up)
    pub const ALL: [Room; 6] = [
        Room::R101,
        Room::R102,
        Room::R201,
        Room::R202,
        Room::R301,
        Room::R302,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Room::R101 => "101",
            Room::R102 => "102",
            Room::R201 => "201",
            Room::R202 => "202",
            Room::R301 => "301",
            Room::R302 => "302",
        }
    }

    /// Parse a room number string ("101".."302")
    pub fn parse(s: &str) -> Option<Room> {
        Room::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_parse_round_trip() {
        for room in Room::ALL {
            assert_eq!(Room::parse(room.as_str()), Some(room));
        }
        assert_eq!(Room::parse("103"), None);
        assert_eq!(Room::parse(""), None);
    }

    #[test]
    fn test_room_serializes_as_number_string() {
        let json = serde_json::to_string(&Room::R201).unwrap();
        assert_eq!(json, "\"201\"");
        let back: Room = serde_json::from_str("\"302\"").unwrap();
        assert_eq!(back, Room::R302);
    }
}
