//! Service catalog operations
//!
//! CRUD over the catalog collection. Deleting a service leaves slot and
//! appointment references dangling; readers treat those as unassigned.

use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::invariants;
use crate::models::Service;
use crate::storage::ServiceRepository;

/// Add a service to the catalog. New services start out active.
#[instrument(skip(store))]
pub fn create_service<S: ServiceRepository>(
    store: &S,
    name: &str,
    duration_minutes: u32,
    color: &str,
) -> Result<Service> {
    validate(name, duration_minutes)?;

    let service = Service::new(name.trim().to_string(), duration_minutes, color.to_string());
    invariants::assert_service_valid(&service);

    let mut services = store.load_services()?;
    services.push(service.clone());
    store.save_services(&services)?;

    info!(service = %service.name, "Service created");
    Ok(service)
}

/// Replace a service's editable fields; `Error::NotFound` when unknown
#[instrument(skip(store))]
pub fn update_service<S: ServiceRepository>(
    store: &S,
    id: Uuid,
    name: &str,
    duration_minutes: u32,
    color: &str,
) -> Result<Service> {
    validate(name, duration_minutes)?;

    let mut services = store.load_services()?;
    let Some(service) = services.iter_mut().find(|s| s.id == id) else {
        return Err(Error::NotFound(format!("service {id}")));
    };

    service.name = name.trim().to_string();
    service.duration_minutes = duration_minutes;
    service.color = color.to_string();
    let updated = service.clone();

    store.save_services(&services)?;
    info!(service = %updated.name, "Service updated");
    Ok(updated)
}

/// Remove a service from the catalog; `Error::NotFound` when unknown
#[instrument(skip(store))]
pub fn delete_service<S: ServiceRepository>(store: &S, id: Uuid) -> Result<()> {
    let mut services = store.load_services()?;
    let before = services.len();
    services.retain(|s| s.id != id);
    if services.len() == before {
        return Err(Error::NotFound(format!("service {id}")));
    }

    store.save_services(&services)?;
    info!(%id, "Service deleted");
    Ok(())
}

fn validate(name: &str, duration_minutes: u32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("service name is required".to_string()));
    }
    if duration_minutes == 0 {
        return Err(Error::Validation(
            "service duration must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn test_create_and_update() {
        let db = Database::open_in_memory().unwrap();

        let service = create_service(&db, "Consulta General", 60, "#4dd0e1").unwrap();
        assert!(service.active);

        let updated = update_service(&db, service.id, "Consulta Express", 30, "#26c6da").unwrap();
        assert_eq!(updated.id, service.id);
        assert_eq!(updated.duration_minutes, 30);

        let stored = db.services().find(service.id).unwrap().unwrap();
        assert_eq!(stored.name, "Consulta Express");
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(
            create_service(&db, "   ", 60, "#4dd0e1"),
            Err(Error::Validation(_))
        ));
        assert!(db.services().load_or_empty().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_zero_duration() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(
            create_service(&db, "Consulta General", 0, "#4dd0e1"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(
            update_service(&db, Uuid::new_v4(), "Consulta", 60, "#fff"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_service() {
        let db = Database::open_in_memory().unwrap();
        let service = create_service(&db, "Asesoramiento", 60, "#00bcd4").unwrap();

        delete_service(&db, service.id).unwrap();
        assert!(db.services().load_or_empty().unwrap().is_empty());

        assert!(matches!(
            delete_service(&db, service.id),
            Err(Error::NotFound(_))
        ));
    }
}
