//! Storage repository traits
//!
//! These traits define the storage interface, allowing for different
//! implementations (SQLite, mock). Domain operations are generic over
//! them; an absent collection reads as empty, a corrupt one errors.

use crate::error::Result;
use crate::models::{Appointment, Service, TimeSlot};

/// Service catalog operations
pub trait ServiceRepository {
    /// Load the whole catalog
    fn load_services(&self) -> Result<Vec<Service>>;

    /// Overwrite the whole catalog
    fn save_services(&self, services: &[Service]) -> Result<()>;
}

/// Working-hours slot operations
pub trait SlotRepository {
    /// Load the whole slot collection
    fn load_slots(&self) -> Result<Vec<TimeSlot>>;

    /// Overwrite the whole slot collection
    fn save_slots(&self, slots: &[TimeSlot]) -> Result<()>;
}

/// Booking collection operations
pub trait AppointmentRepository {
    /// Load the whole booking collection
    fn load_appointments(&self) -> Result<Vec<Appointment>>;

    /// Overwrite the whole booking collection
    fn save_appointments(&self, appointments: &[Appointment]) -> Result<()>;
}

/// Combined storage interface
///
/// Provides access to all repository operations.
pub trait Storage: ServiceRepository + SlotRepository + AppointmentRepository {}

// Blanket implementation: any type implementing all traits implements Storage
impl<T> Storage for T where T: ServiceRepository + SlotRepository + AppointmentRepository {}
