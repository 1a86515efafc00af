//! Retention policy
//!
//! The planner only ever needs today and tomorrow, and breakfast service is
//! over by midday, so stored days expire on a short clock:
//! - yesterday's record: always expired
//! - today's record: expired once the local hour reaches 12
//! - anything older than yesterday: always expired (catch-all for days the
//!   app was not opened)
//! - a stored key that is not a date at all is treated as expired
//!
//! The wall clock is passed in; `*_now` wrappers read the local time.

use chrono::{Local, NaiveDateTime, Timelike};

use crate::dates::parse_date;
use crate::storage::{DayStore, Store};

/// Is a stored date eligible for deletion at the given instant?
pub fn is_expired(date: &str, now: NaiveDateTime) -> bool {
    let Some(date) = parse_date(date) else {
        return true;
    };
    let today = now.date();
    date < today || (date == today && now.hour() >= 12)
}

/// Delete every expired stored day and return the deleted dates, ascending.
/// Calling again immediately returns an empty list.
pub fn check_and_cleanup_expired<S: Store>(
    store: &mut DayStore<S>,
    now: NaiveDateTime,
) -> Vec<String> {
    let mut cleared = Vec::new();
    for date in store.list_dates() {
        if is_expired(&date, now) && store.delete_day(&date) {
            cleared.push(date);
        }
    }
    if !cleared.is_empty() {
        tracing::debug!(count = cleared.len(), "expired days cleared");
    }
    cleared
}

/// Read-only check: is there anything the cleanup would delete right now?
/// Deciding to clean must not itself be a mutation.
pub fn should_auto_cleanup<S: Store>(store: &DayStore<S>, now: NaiveDateTime) -> bool {
    store.list_dates().iter().any(|date| is_expired(date, now))
}

pub fn check_and_cleanup_expired_now<S: Store>(store: &mut DayStore<S>) -> Vec<String> {
    check_and_cleanup_expired(store, Local::now().naive_local())
}

pub fn should_auto_cleanup_now<S: Store>(store: &DayStore<S>) -> bool {
    should_auto_cleanup(store, Local::now().naive_local())
}
