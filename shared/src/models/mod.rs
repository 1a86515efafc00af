//! Domain entities
//!
//! One submodule per entity, re-exported flat. Serialized field names keep
//! the envelope's established wire layout (camelCase, `type` for a guest's
//! breakfast type), so records written before the rewrite read back
//! unchanged.

mod day_data;
mod guest;
mod room;
mod room_data;

pub use day_data::DayData;
pub use guest::{BreakfastType, Guest, GuestType};
pub use room::Room;
pub use room_data::{RoomData, DEFAULT_BREAKFAST_TIME, MAX_GUESTS};
