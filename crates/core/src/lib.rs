//! Turnero Core Library
//!
//! Record store, availability engine, appointment lifecycle, and stats
//! aggregation for the ODYSSEY Turnero booking system.

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod error;
pub mod invariants;
pub mod models;
pub mod schedule;
pub mod stats;
pub mod storage;

pub use availability::{available_slots, booking_dates};
pub use booking::{
    create_appointment, create_public_booking, delete_appointment, open_slots,
    update_appointment, AppointmentDraft, AppointmentUpdate, BookingRequest,
};
pub use catalog::{create_service, delete_service, update_service};
pub use error::{Error, Result};
pub use models::*;
pub use schedule::{
    assign_service, generate_slots, regenerate_slots, remove_slot, set_availability,
    DEFAULT_END_HOUR, DEFAULT_START_HOUR,
};
pub use stats::{compute_stats, week_bounds, DayStats};
pub use storage::{
    seed_defaults, AppointmentRepository, AppointmentStore, Database, RecordStore,
    ServiceRepository, ServiceStore, SettingsStore, SlotRepository, SlotStore, Storage,
};
