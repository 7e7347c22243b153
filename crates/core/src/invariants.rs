//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds. The intended-but-
//! unenforced booking rules (unique (date, time), live service
//! references) are NOT asserted here, since the system permits states
//! that violate them.

use uuid::Uuid;

use crate::models::{Appointment, Service, TimeSlot};

/// A booking that passed validation carries its required fields
pub fn assert_appointment_valid(appointment: &Appointment) {
    debug_assert!(
        appointment.id != Uuid::nil(),
        "Appointment has nil id"
    );

    debug_assert!(
        !appointment.client_name.trim().is_empty(),
        "Appointment {} has empty client name",
        appointment.id
    );

    debug_assert!(
        !appointment.client_phone.trim().is_empty(),
        "Appointment {} has empty client phone",
        appointment.id
    );

    debug_assert!(
        !appointment.client_email.trim().is_empty(),
        "Appointment {} has empty client email",
        appointment.id
    );
}

/// A validated catalog entry is well formed
pub fn assert_service_valid(service: &Service) {
    debug_assert!(service.id != Uuid::nil(), "Service has nil id");

    debug_assert!(
        !service.name.trim().is_empty(),
        "Service {} has empty name",
        service.id
    );

    debug_assert!(
        service.duration_minutes > 0,
        "Service {} has zero duration",
        service.id
    );
}

/// Generated schedules are strictly ascending, hence duplicate-free
pub fn assert_slot_sequence(slots: &[TimeSlot]) {
    debug_assert!(
        slots.windows(2).all(|pair| pair[0].time < pair[1].time),
        "Generated slots are not strictly ascending"
    );
}
