//! Day Order Model

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Room, RoomData};

/// One calendar day's breakfast orders: a total map from every room to its
/// order. Totality holds by construction and is re-established when loading
/// a record that is missing a room, so lookups never need existence checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayData {
    /// "YYYY-MM-DD"
    pub date: String,
    #[serde(deserialize_with = "deserialize_total_rooms")]
    rooms: BTreeMap<Room, RoomData>,
}

impl DayData {
    /// Materialize a day with an empty order for every room
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            rooms: Room::ALL
                .into_iter()
                .map(|room| (room, RoomData::empty(room)))
                .collect(),
        }
    }

    pub fn room(&self, room: Room) -> &RoomData {
        self.rooms
            .get(&room)
            .expect("rooms map is total by construction")
    }

    pub fn room_mut(&mut self, room: Room) -> &mut RoomData {
        self.rooms
            .entry(room)
            .or_insert_with(|| RoomData::empty(room))
    }

    /// All room orders in room-number order
    pub fn rooms(&self) -> impl Iterator<Item = &RoomData> {
        self.rooms.values()
    }

    /// Reset one room to its empty order
    pub fn clear_room(&mut self, room: Room) {
        self.room_mut(room).clear();
    }

    /// True when at least one room feeds into the day's summary
    pub fn has_orders(&self) -> bool {
        self.rooms().any(|r| r.qualifies())
    }

    /// The same orders filed under another date (used by day duplication)
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

/// Accept a partial rooms map and fill the gaps with empty orders, so a
/// hand-edited or older record still yields a total map
fn deserialize_total_rooms<'de, D>(deserializer: D) -> Result<BTreeMap<Room, RoomData>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut rooms = BTreeMap::<Room, RoomData>::deserialize(deserializer)?;
    for room in Room::ALL {
        rooms.entry(room).or_insert_with(|| RoomData::empty(room));
    }
    Ok(rooms)
}
