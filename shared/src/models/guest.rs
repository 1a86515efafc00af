//! Guest Model

use serde::{Deserialize, Serialize};

/// Breakfast menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BreakfastType {
    #[default]
    English,
    #[serde(rename = "Sri Lankan")]
    SriLankan,
}

impl BreakfastType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakfastType::English => "English",
            BreakfastType::SriLankan => "Sri Lankan",
        }
    }
}

/// Adult/kid distinction, tracked per guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GuestType {
    #[default]
    Adult,
    Kid,
}

/// One breakfast diner within a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Positional id ("guest-1", "guest-2", …), unique within the room's
    /// guest list and stable while the list does not shrink below it
    pub id: String,
    #[serde(rename = "type")]
    pub breakfast_type: BreakfastType,
    pub guest_type: GuestType,
    /// Dietary/allergy note; absent and empty are equivalent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Guest {
    /// New guest at the given 1-based position, with the house defaults
    pub fn numbered(position: usize) -> Self {
        Self {
            id: format!("guest-{position}"),
            breakfast_type: BreakfastType::English,
            guest_type: GuestType::Adult,
            note: None,
        }
    }

    /// The note, if it has any visible content
    pub fn note_text(&self) -> Option<&str> {
        self.note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}
