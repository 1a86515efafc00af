//! Share message formatter
//!
//! Renders a day (or one room) into the WhatsApp-style text block the
//! kitchen receives. Section order is a contract: header, summary, time
//! slots, per-room breakdown, notes. Pure functions of the data plus the
//! caller's notion of "today".

use chrono::NaiveDate;
use shared::{generate_breakfast_summary, DayData, Room, RoomData};

use crate::dates::{next_day, parse_date};

/// Long date label for the message header: "Today 15 June 2025",
/// "Tomorrow 16 June 2025" or the bare "17 June 2025"
fn share_date_label(date: &str, today: NaiveDate) -> String {
    let Some(d) = parse_date(date) else {
        return date.to_string();
    };
    let base = d.format("%-d %B %Y");
    if d == today {
        format!("Today {base}")
    } else if d == next_day(today) {
        format!("Tomorrow {base}")
    } else {
        base.to_string()
    }
}

/// Half-plate totals print as "2.5", whole ones as "3"
fn format_plates(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{total:.0}")
    } else {
        format!("{total:.1}")
    }
}

/// Full kitchen report for one day. Days without a single qualifying room
/// collapse to a fixed one-line body instead of empty sections.
pub fn format_day_message(day: &DayData, today: NaiveDate) -> String {
    let label = share_date_label(&day.date, today);
    let header = format!("🌅 *Hilldale Breakfast Order*\n*{label}*");

    if !day.has_orders() {
        return format!("{header}\n\nNo breakfast orders set for this day.");
    }

    let summary = generate_breakfast_summary(day);
    let mut msg = format!("{header}\n\n");

    msg.push_str("📊 *SUMMARY*\n");
    msg.push_str(&format!(
        "• Total Guests: {} ({} Adults, {} Kids)\n",
        summary.total_guests, summary.adults, summary.kids
    ));
    msg.push_str(&format!("• English Breakfast: {}\n", summary.english_breakfasts));
    msg.push_str(&format!("• Sri Lankan Breakfast: {}\n", summary.sri_lankan_breakfasts));
    msg.push_str(&format!(
        "• Fruit Platters: {} full + {} half ({} total)\n\n",
        summary.fruit_platters.full_plates,
        summary.fruit_platters.half_plates,
        format_plates(summary.fruit_platters.total_plates)
    ));

    if !summary.time_slots.is_empty() {
        msg.push_str("⏰ *TIME SLOTS*\n");
        for (time, count) in &summary.time_slots {
            msg.push_str(&format!("• {time}: {count} guests\n"));
        }
        msg.push('\n');
    }

    msg.push_str("🏠 *ROOM BREAKDOWN*\n");
    for room in Room::ALL {
        let data = day.room(room);
        if !data.qualifies() {
            continue;
        }
        let time = data.breakfast_time.as_deref().unwrap_or("");
        msg.push_str(&format!("\n*Room {room}* - {time}\n"));
        msg.push_str(&format!(
            "{} guests ({}A, {}K)\n",
            data.guest_count, data.adult_count, data.kid_count
        ));
        push_type_counts(&mut msg, data, "- ");
        push_notes(&mut msg, data, "📝 Notes:\n", "  G");
    }

    msg
}

/// Single-room report; an incomplete or empty room yields a fixed message
pub fn format_room_message(day: &DayData, room: Room, today: NaiveDate) -> String {
    let label = share_date_label(&day.date, today);
    let data = day.room(room);

    if !data.qualifies() {
        return format!(
            "🌅 *Room {room} Breakfast Order*\n*{label}*\n\nNo breakfast order set for this room."
        );
    }

    let time = data.breakfast_time.as_deref().unwrap_or("");
    let mut msg = format!("🌅 *Room {room} Breakfast Order*\n*{label}*\n\n");
    msg.push_str(&format!("⏰ Time: {time}\n"));
    msg.push_str(&format!(
        "👥 Guests: {} ({} Adults, {} Kids)\n\n",
        data.guest_count, data.adult_count, data.kid_count
    ));

    msg.push_str("🍳 *Breakfast Types:*\n");
    push_type_counts(&mut msg, data, "• ");
    push_notes(&mut msg, data, "\n📝 *Special Notes:*\n", "• Guest ");

    msg
}

fn push_type_counts(msg: &mut String, data: &RoomData, bullet: &str) {
    let english = data.english_count();
    let sri_lankan = data.sri_lankan_count();
    if english > 0 {
        msg.push_str(&format!("{bullet}English: {english}\n"));
    }
    if sri_lankan > 0 {
        msg.push_str(&format!("{bullet}Sri Lankan: {sri_lankan}\n"));
    }
}

/// Guest notes, numbered by 1-based position in the room's guest list
fn push_notes(msg: &mut String, data: &RoomData, heading: &str, bullet: &str) {
    let noted: Vec<(usize, &str)> = data
        .guests
        .iter()
        .enumerate()
        .filter_map(|(i, g)| g.note_text().map(|note| (i + 1, note)))
        .collect();
    if noted.is_empty() {
        return;
    }
    msg.push_str(heading);
    for (number, note) in noted {
        msg.push_str(&format!("{bullet}{number}: {note}\n"));
    }
}
