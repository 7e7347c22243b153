//! Slot availability engine
//!
//! Pure filtering over the slot and appointment collections; no storage
//! access here.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use crate::models::{Appointment, TimeSlot};

/// Slots open for booking on `date`: available-flagged slots whose time
/// is not already taken by an appointment on that date. Input order is
/// preserved. An empty result means "no slots", not an error.
pub fn available_slots(
    date: NaiveDate,
    all_slots: &[TimeSlot],
    all_appointments: &[Appointment],
) -> Vec<TimeSlot> {
    let booked: HashSet<NaiveTime> = all_appointments
        .iter()
        .filter(|appointment| appointment.date == date)
        .map(|appointment| appointment.time)
        .collect();

    all_slots
        .iter()
        .filter(|slot| slot.available && !booked.contains(&slot.time))
        .cloned()
        .collect()
}

/// Dates offered by the public booking wizard: the next `days` calendar
/// days starting at `from`, weekends excluded.
pub fn booking_dates(from: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..i64::from(days))
        .map(|offset| from + Duration::days(offset))
        .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}
