//! Kitchen Summary
//!
//! Aggregates one day's orders into the figures the kitchen plans around.
//! Pure derivations: recomputed on demand, never stored, independent of map
//! iteration order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::DayData;

/// Fruit platter prep quantities: one full plate per adult, one half plate
/// per kid. The combined total counts a half plate as 0.5 and is kept
/// fractional — it is a portion measure, not a count to round.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitPlatters {
    pub full_plates: u32,
    pub half_plates: u32,
    pub total_plates: f64,
}

/// Derived aggregate over one day. Only rooms that are complete and have
/// diners contribute; everything else is invisible to the kitchen.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakfastSummary {
    pub total_guests: u32,
    pub adults: u32,
    pub kids: u32,
    pub english_breakfasts: u32,
    pub sri_lankan_breakfasts: u32,
    pub fruit_platters: FruitPlatters,
    /// Breakfast time → guest count, summed across rooms sharing a slot
    pub time_slots: BTreeMap<String, u32>,
}

pub fn calculate_fruit_platters(adults: u32, kids: u32) -> FruitPlatters {
    let full_plates = adults;
    let half_plates = kids;
    FruitPlatters {
        full_plates,
        half_plates,
        total_plates: f64::from(full_plates) + f64::from(half_plates) * 0.5,
    }
}

pub fn generate_breakfast_summary(day: &DayData) -> BreakfastSummary {
    let mut summary = BreakfastSummary::default();

    for room in day.rooms() {
        if !(room.is_complete && room.guest_count > 0) {
            continue;
        }
        summary.total_guests += room.guest_count;
        summary.adults += room.adult_count;
        summary.kids += room.kid_count;
        summary.english_breakfasts += room.english_count();
        summary.sri_lankan_breakfasts += room.sri_lankan_count();

        if let Some(time) = &room.breakfast_time {
            *summary.time_slots.entry(time.clone()).or_insert(0) += room.guest_count;
        }
    }

    summary.fruit_platters = calculate_fruit_platters(summary.adults, summary.kids);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakfastType, GuestType, Room};

    #[test]
    fn test_fruit_platters_formula() {
        for (adults, kids) in [(0, 0), (1, 0), (0, 1), (1, 1), (5, 3), (12, 7)] {
            let platters = calculate_fruit_platters(adults, kids);
            assert_eq!(platters.full_plates, adults);
            assert_eq!(platters.half_plates, kids);
            assert_eq!(
                platters.total_plates,
                f64::from(adults) + f64::from(kids) * 0.5
            );
        }
        // Fractional totals are preserved, not rounded
        assert_eq!(calculate_fruit_platters(1, 1).total_plates, 1.5);
    }

    #[test]
    fn test_empty_day_summary_is_zero() {
        let summary = generate_breakfast_summary(&DayData::empty("2025-01-01"));
        assert_eq!(summary, BreakfastSummary::default());
        assert!(summary.time_slots.is_empty());
    }

    #[test]
    fn test_single_room_summary() {
        // Room 101: 08:00, 2 adults + 1 kid, all English
        let mut day = DayData::empty("2025-01-01");
        let room = day.room_mut(Room::R101);
        room.set_guest_counts(3, 2);
        room.set_breakfast_time("08:00").unwrap();

        let summary = generate_breakfast_summary(&day);
        assert_eq!(summary.total_guests, 3);
        assert_eq!(summary.adults, 2);
        assert_eq!(summary.kids, 1);
        assert_eq!(summary.english_breakfasts, 3);
        assert_eq!(summary.sri_lankan_breakfasts, 0);
        assert_eq!(summary.fruit_platters.full_plates, 2);
        assert_eq!(summary.fruit_platters.half_plates, 1);
        assert_eq!(summary.fruit_platters.total_plates, 2.5);
        assert_eq!(summary.time_slots.get("08:00"), Some(&3));
        assert_eq!(summary.time_slots.len(), 1);
    }

    #[test]
    fn test_incomplete_rooms_do_not_contribute() {
        let mut day = DayData::empty("2025-01-01");
        day.room_mut(Room::R101).set_guest_counts(2, 2);
        day.room_mut(Room::R101).clear_breakfast_time();
        // Room 102 has a time but no guests
        assert!(day.room(Room::R102).breakfast_time.is_some());

        let summary = generate_breakfast_summary(&day);
        assert_eq!(summary.total_guests, 0);
        assert!(summary.time_slots.is_empty());
    }

    #[test]
    fn test_time_slots_sum_across_rooms() {
        let mut day = DayData::empty("2025-01-01");
        for (room, total, adults) in [(Room::R101, 2, 2), (Room::R202, 3, 1)] {
            let r = day.room_mut(room);
            r.set_guest_counts(total, adults);
            r.set_breakfast_time("08:30").unwrap();
        }
        let r = day.room_mut(Room::R301);
        r.set_guest_counts(1, 1);
        r.set_breakfast_time("07:00").unwrap();

        let summary = generate_breakfast_summary(&day);
        assert_eq!(summary.total_guests, 6);
        assert_eq!(summary.time_slots.get("08:30"), Some(&5));
        assert_eq!(summary.time_slots.get("07:00"), Some(&1));
    }

    #[test]
    fn test_breakfast_type_tally_per_guest() {
        let mut day = DayData::empty("2025-01-01");
        let room = day.room_mut(Room::R102);
        room.set_guest_counts(4, 4);
        room.set_guest_breakfast_type(1, BreakfastType::SriLankan);
        room.set_guest_breakfast_type(3, BreakfastType::SriLankan);
        room.set_guest_type(3, GuestType::Kid);

        let summary = generate_breakfast_summary(&day);
        assert_eq!(summary.english_breakfasts, 2);
        assert_eq!(summary.sri_lankan_breakfasts, 2);
        assert_eq!(summary.adults, 3);
        assert_eq!(summary.kids, 1);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let mut day = DayData::empty("2025-01-01");
        day.room_mut(Room::R201).set_guest_counts(5, 3);
        let first = generate_breakfast_summary(&day);
        let second = generate_breakfast_summary(&day);
        assert_eq!(first, second);
    }
}
