//! Room Order Model
//!
//! The breakfast order for one room on one day, plus every mutation the
//! front end performs on it. Mutations recompute the dependent fields
//! (`guest_count`/`adult_count`/`kid_count`, `is_complete`) together, so the
//! count invariants hold after each call rather than being checked later.

use serde::{Deserialize, Serialize};

use super::{BreakfastType, Guest, GuestType, Room};
use crate::error::DomainError;

/// House policy: at most 18 diners per room order
pub const MAX_GUESTS: u32 = 18;

/// Breakfast time a freshly materialized room starts with
pub const DEFAULT_BREAKFAST_TIME: &str = "07:30";

/// One room's breakfast order
///
/// Invariants (maintained by the mutation methods):
/// - `adult_count + kid_count == guest_count`
/// - `guests.len() == guest_count`
/// - `adult_count` equals the number of guests with `GuestType::Adult`
/// - `is_complete` iff `guest_count > 0` and a breakfast time is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomData {
    pub room: Room,
    /// "HH:MM"; `None` means not scheduled yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast_time: Option<String>,
    pub guest_count: u32,
    pub adult_count: u32,
    pub kid_count: u32,
    pub guests: Vec<Guest>,
    pub is_complete: bool,
}

impl RoomData {
    /// Fresh order: default time, no guests, not complete
    pub fn empty(room: Room) -> Self {
        Self {
            room,
            breakfast_time: Some(DEFAULT_BREAKFAST_TIME.to_string()),
            guest_count: 0,
            adult_count: 0,
            kid_count: 0,
            guests: Vec::new(),
            is_complete: false,
        }
    }

    /// A room feeds into summaries and share messages only when it is
    /// complete and actually has diners
    pub fn qualifies(&self) -> bool {
        self.is_complete && self.guest_count > 0
    }

    /// Set the total and adult headcount; kids are the remainder.
    ///
    /// `total` is clamped to the house maximum and `adults` to `total`.
    /// The guest list is truncated or extended to match (new guests get the
    /// defaults), then guest types are resequenced positionally.
    pub fn set_guest_counts(&mut self, total: u32, adults: u32) {
        let total = total.min(MAX_GUESTS);
        let adults = adults.min(total);

        self.guests.truncate(total as usize);
        while self.guests.len() < total as usize {
            self.guests.push(Guest::numbered(self.guests.len() + 1));
        }

        self.resequence_guest_types(adults);
        self.refresh_complete();
    }

    /// Positional split policy: the first `adults` guests are adults, the
    /// rest are kids. Kids default to an English breakfast. Counts are
    /// re-derived from the flags so both views always agree.
    pub fn resequence_guest_types(&mut self, adults: u32) {
        for (i, guest) in self.guests.iter_mut().enumerate() {
            if (i as u32) < adults {
                guest.guest_type = GuestType::Adult;
            } else {
                guest.guest_type = GuestType::Kid;
                guest.breakfast_type = BreakfastType::English;
            }
        }
        self.recount_guest_split();
    }

    /// Re-derive all three counts from the guest list
    fn recount_guest_split(&mut self) {
        self.guest_count = self.guests.len() as u32;
        self.adult_count = self
            .guests
            .iter()
            .filter(|g| g.guest_type == GuestType::Adult)
            .count() as u32;
        self.kid_count = self.guest_count - self.adult_count;
    }

    fn refresh_complete(&mut self) {
        self.is_complete = self.guest_count > 0 && self.breakfast_time.is_some();
    }

    /// Set the breakfast time, validating and zero-padding "HH:MM"
    pub fn set_breakfast_time(&mut self, time: &str) -> Result<(), DomainError> {
        let normalized = normalize_time(time).ok_or_else(|| DomainError::InvalidTime(time.to_string()))?;
        self.breakfast_time = Some(normalized);
        self.refresh_complete();
        Ok(())
    }

    /// Unset the breakfast time; the room can no longer be complete
    pub fn clear_breakfast_time(&mut self) {
        self.breakfast_time = None;
        self.refresh_complete();
    }

    /// Change one guest's breakfast choice. Out-of-range indices are
    /// ignored and reported as `false`.
    pub fn set_guest_breakfast_type(&mut self, index: usize, breakfast_type: BreakfastType) -> bool {
        match self.guests.get_mut(index) {
            Some(guest) => {
                guest.breakfast_type = breakfast_type;
                true
            }
            None => false,
        }
    }

    /// Change one guest's adult/kid flag and recount the split from the
    /// per-guest flags, keeping counts and flags in agreement.
    pub fn set_guest_type(&mut self, index: usize, guest_type: GuestType) -> bool {
        match self.guests.get_mut(index) {
            Some(guest) => {
                guest.guest_type = guest_type;
                self.recount_guest_split();
                true
            }
            None => false,
        }
    }

    /// Set or clear one guest's dietary note; blank input clears it
    pub fn set_guest_note(&mut self, index: usize, note: &str) -> bool {
        match self.guests.get_mut(index) {
            Some(guest) => {
                let trimmed = note.trim();
                guest.note = (!trimmed.is_empty()).then(|| trimmed.to_string());
                true
            }
            None => false,
        }
    }

    pub fn apply_breakfast_type_to_all(&mut self, breakfast_type: BreakfastType) {
        for guest in &mut self.guests {
            guest.breakfast_type = breakfast_type;
        }
    }

    pub fn apply_guest_type_to_all(&mut self, guest_type: GuestType) {
        for guest in &mut self.guests {
            guest.guest_type = guest_type;
        }
        self.recount_guest_split();
    }

    /// Copy breakfast choice, guest type and note from the guest above
    pub fn copy_from_previous_guest(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.guests.len() {
            return false;
        }
        let previous = self.guests[index - 1].clone();
        let guest = &mut self.guests[index];
        guest.breakfast_type = previous.breakfast_type;
        guest.guest_type = previous.guest_type;
        guest.note = previous.note;
        self.recount_guest_split();
        true
    }

    /// Full reset to the empty order; the only way a room is "deleted"
    pub fn clear(&mut self) {
        *self = RoomData::empty(self.room);
    }

    pub fn english_count(&self) -> u32 {
        self.guests
            .iter()
            .filter(|g| g.breakfast_type == BreakfastType::English)
            .count() as u32
    }

    pub fn sri_lankan_count(&self) -> u32 {
        self.guests
            .iter()
            .filter(|g| g.breakfast_type == BreakfastType::SriLankan)
            .count() as u32
    }
}

/// Validate "H:MM"/"HH:MM" and return the zero-padded form
fn normalize_time(time: &str) -> Option<String> {
    let (h, m) = time.split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    if hour >= 24 || minute >= 60 {
        return None;
    }
    Some(format!("{hour:02}:{minute:02}"))
}
