//! Working-hours schedule maintenance
//!
//! Hourly slot generation and per-slot edits, following the record
//! store's replace-the-collection write model. Regeneration discards
//! the previous slots entirely, assignments included.

use chrono::NaiveTime;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::invariants;
use crate::models::TimeSlot;
use crate::storage::{SlotRepository, Storage};

/// Stock working hours: 09:00 through 17:00, one slot per hour
pub const DEFAULT_START_HOUR: u32 = 9;
pub const DEFAULT_END_HOUR: u32 = 18;

/// One available slot at the top of each hour in `[start_hour, end_hour)`
pub fn generate_slots(start_hour: u32, end_hour: u32) -> Result<Vec<TimeSlot>> {
    if start_hour >= end_hour {
        return Err(Error::Validation(
            "start hour must be before end hour".to_string(),
        ));
    }
    if end_hour > 24 {
        return Err(Error::Validation("end hour must be at most 24".to_string()));
    }

    let slots = (start_hour..end_hour)
        .map(|hour| {
            NaiveTime::from_hms_opt(hour, 0, 0)
                .map(TimeSlot::new)
                .ok_or_else(|| Error::Validation(format!("hour {hour} is out of range")))
        })
        .collect::<Result<Vec<_>>>()?;

    invariants::assert_slot_sequence(&slots);
    Ok(slots)
}

/// Regenerate the working hours, replacing the entire slot collection
#[instrument(skip(store))]
pub fn regenerate_slots<S: SlotRepository>(
    store: &S,
    start_hour: u32,
    end_hour: u32,
) -> Result<Vec<TimeSlot>> {
    let slots = generate_slots(start_hour, end_hour)?;
    store.save_slots(&slots)?;
    info!(count = slots.len(), start_hour, end_hour, "Working hours regenerated");
    Ok(slots)
}

/// Bind a slot to a service from the catalog
#[instrument(skip(store))]
pub fn assign_service<S: Storage>(store: &S, slot_id: Uuid, service_id: Uuid) -> Result<TimeSlot> {
    let services = store.load_services()?;
    if !services.iter().any(|s| s.id == service_id) {
        return Err(Error::NotFound(format!("service {service_id}")));
    }

    let mut slots = store.load_slots()?;
    let Some(slot) = slots.iter_mut().find(|s| s.id == slot_id) else {
        return Err(Error::NotFound(format!("slot {slot_id}")));
    };

    slot.service_id = Some(service_id);
    let updated = slot.clone();
    store.save_slots(&slots)?;
    Ok(updated)
}

/// Flag a slot as open or closed for booking
#[instrument(skip(store))]
pub fn set_availability<S: SlotRepository>(
    store: &S,
    slot_id: Uuid,
    available: bool,
) -> Result<TimeSlot> {
    let mut slots = store.load_slots()?;
    let Some(slot) = slots.iter_mut().find(|s| s.id == slot_id) else {
        return Err(Error::NotFound(format!("slot {slot_id}")));
    };

    slot.available = available;
    let updated = slot.clone();
    store.save_slots(&slots)?;
    Ok(updated)
}

/// Drop a slot from the schedule; `Error::NotFound` when unknown
#[instrument(skip(store))]
pub fn remove_slot<S: SlotRepository>(store: &S, slot_id: Uuid) -> Result<()> {
    let mut slots = store.load_slots()?;
    let before = slots.len();
    slots.retain(|s| s.id != slot_id);
    if slots.len() == before {
        return Err(Error::NotFound(format!("slot {slot_id}")));
    }

    store.save_slots(&slots)?;
    info!(%slot_id, "Slot removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::create_service;
    use crate::storage::Database;

    #[test]
    fn test_generate_default_hours() {
        let slots = generate_slots(DEFAULT_START_HOUR, DEFAULT_END_HOUR).unwrap();
        assert_eq!(slots.len(), 9);
        assert_eq!(slots[0].time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slots[8].time, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert!(slots.iter().all(|s| s.available && s.service_id.is_none()));
    }

    #[test]
    fn test_generate_rejects_inverted_range() {
        assert!(matches!(
            generate_slots(18, 9),
            Err(Error::Validation(_))
        ));
        assert!(matches!(generate_slots(9, 9), Err(Error::Validation(_))));
    }

    #[test]
    fn test_generate_rejects_past_midnight() {
        assert!(matches!(generate_slots(9, 25), Err(Error::Validation(_))));
    }

    #[test]
    fn test_regenerate_replaces_collection() {
        let db = Database::open_in_memory().unwrap();

        let morning = regenerate_slots(&db, 9, 12).unwrap();
        assert_eq!(morning.len(), 3);

        let afternoon = regenerate_slots(&db, 14, 18).unwrap();
        assert_eq!(afternoon.len(), 4);

        let stored = db.time_slots().load_or_empty().unwrap();
        assert_eq!(stored, afternoon);
        // Previous slots (and their ids) are gone
        assert!(db.time_slots().find(morning[0].id).unwrap().is_none());
    }

    #[test]
    fn test_assign_service_requires_existing_service() {
        let db = Database::open_in_memory().unwrap();
        let slots = regenerate_slots(&db, 9, 12).unwrap();

        assert!(matches!(
            assign_service(&db, slots[0].id, Uuid::new_v4()),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_assign_service_binds_slot() {
        let db = Database::open_in_memory().unwrap();
        let service = create_service(&db, "Consulta General", 60, "#4dd0e1").unwrap();
        let slots = regenerate_slots(&db, 9, 12).unwrap();

        let updated = assign_service(&db, slots[1].id, service.id).unwrap();
        assert_eq!(updated.service_id, Some(service.id));

        let stored = db.time_slots().find(slots[1].id).unwrap().unwrap();
        assert_eq!(stored.service_id, Some(service.id));
    }

    #[test]
    fn test_set_availability() {
        let db = Database::open_in_memory().unwrap();
        let slots = regenerate_slots(&db, 9, 12).unwrap();

        let closed = set_availability(&db, slots[0].id, false).unwrap();
        assert!(!closed.available);

        let reopened = set_availability(&db, slots[0].id, true).unwrap();
        assert!(reopened.available);
    }

    #[test]
    fn test_remove_slot() {
        let db = Database::open_in_memory().unwrap();
        let slots = regenerate_slots(&db, 9, 12).unwrap();

        remove_slot(&db, slots[0].id).unwrap();
        assert_eq!(db.time_slots().load_or_empty().unwrap().len(), 2);

        assert!(matches!(
            remove_slot(&db, slots[0].id),
            Err(Error::NotFound(_))
        ));
    }
}
