//! Dashboard statistics
//!
//! Derived counts over the appointment and slot collections. Pure and
//! idempotent; callers supply the reference date and wall-clock time.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::models::{Appointment, TimeSlot};

/// Derived dashboard figures for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStats {
    /// Appointments on the reference date
    pub today_count: usize,
    /// Earliest appointment on the reference date strictly after `now`
    pub next_appointment: Option<NaiveTime>,
    /// Appointments within the Sunday-start week containing the date
    pub week_count: usize,
    /// Percentage of slots consumed on the reference date, rounded.
    /// Can exceed 100 when double-bookings exist.
    pub occupancy_rate: u32,
}

/// First and last day of the Sunday-start calendar week containing `date`
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    (start, start + Duration::days(6))
}

/// Compute the dashboard figures for `date` at wall-clock `now`
pub fn compute_stats(
    date: NaiveDate,
    now: NaiveTime,
    appointments: &[Appointment],
    slots: &[TimeSlot],
) -> DayStats {
    let today_count = appointments.iter().filter(|a| a.date == date).count();

    let next_appointment = appointments
        .iter()
        .filter(|a| a.date == date && a.time > now)
        .map(|a| a.time)
        .min();

    let (week_start, week_end) = week_bounds(date);
    let week_count = appointments
        .iter()
        .filter(|a| a.date >= week_start && a.date <= week_end)
        .count();

    let occupancy_rate = if slots.is_empty() {
        0
    } else {
        (100.0 * today_count as f64 / slots.len() as f64).round() as u32
    };

    DayStats {
        today_count,
        next_appointment,
        week_count,
        occupancy_rate,
    }
}
