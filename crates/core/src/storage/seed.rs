//! Default data seeding
//!
//! Applies the stock catalog and working hours on first open. Only an
//! absent collection is seeded; a present-but-empty one was emptied on
//! purpose and is left alone.

use tracing::info;

use super::Database;
use crate::error::Result;
use crate::models::Service;
use crate::schedule::{generate_slots, DEFAULT_END_HOUR, DEFAULT_START_HOUR};

/// Seed the stock catalog and working hours where missing
pub fn seed_defaults(db: &Database) -> Result<()> {
    if db.services().load()?.is_none() {
        let catalog = vec![
            Service::new("Consulta General".to_string(), 60, "#4dd0e1".to_string()),
            Service::new("Servicio Técnico".to_string(), 60, "#26c6da".to_string()),
            Service::new("Asesoramiento".to_string(), 60, "#00bcd4".to_string()),
        ];
        db.services().save(&catalog)?;
        info!(count = catalog.len(), "Seeded default service catalog");
    }

    if db.time_slots().load()?.is_none() {
        let slots = generate_slots(DEFAULT_START_HOUR, DEFAULT_END_HOUR)?;
        db.time_slots().save(&slots)?;
        info!(count = slots.len(), "Seeded default working hours");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_fresh_database() {
        let db = Database::open_in_memory().unwrap();
        seed_defaults(&db).unwrap();

        let services = db.services().load_or_empty().unwrap();
        assert_eq!(services.len(), 3);
        assert!(services.iter().all(|s| s.active));

        let slots = db.time_slots().load_or_empty().unwrap();
        assert_eq!(slots.len(), 9);
    }

    #[test]
    fn test_existing_collections_left_alone() {
        let db = Database::open_in_memory().unwrap();

        // Collections exist but are empty: the operator cleared them
        db.services().save(&[]).unwrap();
        db.time_slots().save(&[]).unwrap();

        seed_defaults(&db).unwrap();

        assert!(db.services().load_or_empty().unwrap().is_empty());
        assert!(db.time_slots().load_or_empty().unwrap().is_empty());
    }

    #[test]
    fn test_seeding_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        seed_defaults(&db).unwrap();
        let first = db.services().load_or_empty().unwrap();

        seed_defaults(&db).unwrap();
        assert_eq!(db.services().load_or_empty().unwrap(), first);
    }
}
