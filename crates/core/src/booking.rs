//! Appointment lifecycle
//!
//! Create, update, and delete bookings over the record store, plus the
//! public wizard's stricter intake path. Every mutation rewrites the
//! whole collection and reports the recomputed day figures through
//! `tracing`.
//!
//! There is deliberately no (date, time) collision check: the admin
//! panel has always allowed double-booking, and callers that want to
//! prevent it consult [`open_slots`] first.

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::availability;
use crate::error::{Error, Result};
use crate::invariants;
use crate::models::{Appointment, TimeSlot, STATUS_CONFIRMED};
use crate::stats;
use crate::storage::Storage;

/// Fields supplied when the admin panel creates a booking
#[derive(Debug, Clone, Default)]
pub struct AppointmentDraft {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    /// Chosen service; resolved from the slot assignment when omitted
    pub service_id: Option<Uuid>,
    pub notes: String,
}

/// Replacement values for a booking's mutable fields
#[derive(Debug, Clone, Default)]
pub struct AppointmentUpdate {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub notes: String,
}

/// Intake from the public booking wizard
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub service_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub notes: String,
}

/// Create a booking from the admin panel. Presence-only validation.
#[instrument(skip(store, draft))]
pub fn create_appointment<S: Storage>(store: &S, draft: AppointmentDraft) -> Result<Appointment> {
    let (date, time) = require_schedule(draft.date, draft.time)?;
    require_contact(&draft.client_name, &draft.client_phone, &draft.client_email)?;

    let service_id = match draft.service_id {
        Some(id) => Some(id),
        None => resolve_service_for_time(store, time)?,
    };

    let appointment = Appointment {
        id: Uuid::new_v4(),
        date,
        time,
        client_name: draft.client_name.trim().to_string(),
        client_phone: draft.client_phone.trim().to_string(),
        client_email: draft.client_email.trim().to_string(),
        service_id,
        notes: draft.notes.trim().to_string(),
        status: STATUS_CONFIRMED.to_string(),
        created_at: Utc::now(),
    };

    commit_booking(store, appointment)
}

/// Create a booking through the public wizard: presence checks plus
/// email-shape and phone-length validation, and the chosen service must
/// exist and be active.
#[instrument(skip(store, request))]
pub fn create_public_booking<S: Storage>(store: &S, request: BookingRequest) -> Result<Appointment> {
    let (date, time) = require_schedule(request.date, request.time)?;
    require_contact(
        &request.client_name,
        &request.client_phone,
        &request.client_email,
    )?;

    if !is_valid_email(request.client_email.trim()) {
        return Err(Error::Validation(
            "clientEmail is not a valid address".to_string(),
        ));
    }
    if request.client_phone.trim().len() < 8 {
        return Err(Error::Validation(
            "clientPhone must have at least 8 digits".to_string(),
        ));
    }

    let service_id = request
        .service_id
        .ok_or_else(|| Error::Validation("a service must be selected".to_string()))?;
    let services = store.load_services()?;
    let service = services
        .iter()
        .find(|s| s.id == service_id)
        .ok_or_else(|| Error::NotFound(format!("service {service_id}")))?;
    if !service.active {
        return Err(Error::Validation(format!(
            "service '{}' is not bookable",
            service.name
        )));
    }

    let appointment = Appointment {
        id: Uuid::new_v4(),
        date,
        time,
        client_name: request.client_name.trim().to_string(),
        client_phone: request.client_phone.trim().to_string(),
        client_email: request.client_email.trim().to_string(),
        service_id: Some(service_id),
        notes: request.notes.trim().to_string(),
        status: STATUS_CONFIRMED.to_string(),
        created_at: Utc::now(),
    };

    commit_booking(store, appointment)
}

/// Replace the mutable fields of a booking. Unknown ids are surfaced as
/// `Error::NotFound` rather than silently ignored.
#[instrument(skip(store, update))]
pub fn update_appointment<S: Storage>(
    store: &S,
    id: Uuid,
    update: AppointmentUpdate,
) -> Result<Appointment> {
    let (date, time) = require_schedule(update.date, update.time)?;
    require_contact(
        &update.client_name,
        &update.client_phone,
        &update.client_email,
    )?;

    let mut appointments = store.load_appointments()?;
    let Some(appointment) = appointments.iter_mut().find(|a| a.id == id) else {
        return Err(Error::NotFound(format!("appointment {id}")));
    };

    appointment.date = date;
    appointment.time = time;
    appointment.client_name = update.client_name.trim().to_string();
    appointment.client_phone = update.client_phone.trim().to_string();
    appointment.client_email = update.client_email.trim().to_string();
    appointment.notes = update.notes.trim().to_string();
    let updated = appointment.clone();

    store.save_appointments(&appointments)?;
    log_day_stats(store, date, &appointments)?;
    Ok(updated)
}

/// Remove a booking by id; `Error::NotFound` when unknown
#[instrument(skip(store))]
pub fn delete_appointment<S: Storage>(store: &S, id: Uuid) -> Result<()> {
    let mut appointments = store.load_appointments()?;
    let Some(index) = appointments.iter().position(|a| a.id == id) else {
        return Err(Error::NotFound(format!("appointment {id}")));
    };

    let removed = appointments.remove(index);
    store.save_appointments(&appointments)?;
    log_day_stats(store, removed.date, &appointments)?;
    Ok(())
}

/// Slots still open on `date`, for rendering a booking grid
pub fn open_slots<S: Storage>(store: &S, date: NaiveDate) -> Result<Vec<TimeSlot>> {
    let slots = store.load_slots()?;
    let appointments = store.load_appointments()?;
    Ok(availability::available_slots(date, &slots, &appointments))
}

fn commit_booking<S: Storage>(store: &S, appointment: Appointment) -> Result<Appointment> {
    invariants::assert_appointment_valid(&appointment);

    let mut appointments = store.load_appointments()?;
    appointments.push(appointment.clone());
    store.save_appointments(&appointments)?;
    log_day_stats(store, appointment.date, &appointments)?;
    Ok(appointment)
}

/// The admin form picks the slot's assigned service for the chosen time;
/// when no slot matches, the first catalog entry stands in.
fn resolve_service_for_time<S: Storage>(store: &S, time: NaiveTime) -> Result<Option<Uuid>> {
    let slots = store.load_slots()?;
    match slots.iter().find(|s| s.time == time) {
        Some(slot) => Ok(slot.service_id),
        None => Ok(store.load_services()?.first().map(|s| s.id)),
    }
}

fn log_day_stats<S: Storage>(
    store: &S,
    date: NaiveDate,
    appointments: &[Appointment],
) -> Result<()> {
    let slots = store.load_slots()?;
    let day = stats::compute_stats(date, Utc::now().time(), appointments, &slots);
    info!(
        date = %date,
        today = day.today_count,
        week = day.week_count,
        occupancy = day.occupancy_rate,
        "Booking collection updated"
    );
    Ok(())
}

fn require_schedule(
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
) -> Result<(NaiveDate, NaiveTime)> {
    let date = date.ok_or_else(|| Error::Validation("date is required".to_string()))?;
    let time = time.ok_or_else(|| Error::Validation("time is required".to_string()))?;
    Ok((date, time))
}

fn require_contact(name: &str, phone: &str, email: &str) -> Result<()> {
    require(name, "clientName")?;
    require(phone, "clientPhone")?;
    require(email, "clientEmail")?;
    Ok(())
}

fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Same structural check the original form applied: one '@' with a
/// dotted domain and no whitespace.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}
