//! SQLite storage layer for the Turnero core
//!
//! Collections are persisted as whole JSON documents in a key-value
//! table, preserving the original flat-blob layout behind a real
//! database file.

mod appointments;
mod migrations;
mod records;
mod seed;
mod services;
mod settings;
mod slots;
mod traits;

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::Connection;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::models::{Appointment, Service, TimeSlot};

pub use appointments::AppointmentStore;
pub use records::{RecordStore, APPOINTMENTS, SERVICES, SETTINGS, TIME_SLOTS};
pub use seed::seed_defaults;
pub use services::ServiceStore;
pub use settings::SettingsStore;
pub use slots::SlotStore;
pub use traits::{AppointmentRepository, ServiceRepository, SlotRepository, Storage};

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap_or(0)
    }

    /// Default on-disk location for the turnero database
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("ar", "odyssey", "turnero").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;
        Ok(dirs.data_dir().join("turnero.db"))
    }

    /// Get untyped record store
    pub fn records(&self) -> RecordStore<'_> {
        RecordStore::new(&self.conn)
    }

    /// Get service catalog store
    pub fn services(&self) -> ServiceStore<'_> {
        ServiceStore::new(&self.conn)
    }

    /// Get time slot store
    pub fn time_slots(&self) -> SlotStore<'_> {
        SlotStore::new(&self.conn)
    }

    /// Get appointment store
    pub fn appointments(&self) -> AppointmentStore<'_> {
        AppointmentStore::new(&self.conn)
    }

    /// Get booking settings store
    pub fn settings(&self) -> SettingsStore<'_> {
        SettingsStore::new(&self.conn)
    }
}

// Implement repository traits for Database
// This enables using Database through the trait interface

impl ServiceRepository for Database {
    fn load_services(&self) -> Result<Vec<Service>> {
        self.services().load_or_empty()
    }

    fn save_services(&self, services: &[Service]) -> Result<()> {
        self.services().save(services)
    }
}

impl SlotRepository for Database {
    fn load_slots(&self) -> Result<Vec<TimeSlot>> {
        self.time_slots().load_or_empty()
    }

    fn save_slots(&self, slots: &[TimeSlot]) -> Result<()> {
        self.time_slots().save(slots)
    }
}

impl AppointmentRepository for Database {
    fn load_appointments(&self) -> Result<Vec<Appointment>> {
        self.appointments().load_or_empty()
    }

    fn save_appointments(&self, appointments: &[Appointment]) -> Result<()> {
        self.appointments().save(appointments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reopen_keeps_collections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turnero.db");

        let catalog = vec![crate::models::Service::new(
            "Consulta General".to_string(),
            60,
            "#4dd0e1".to_string(),
        )];

        {
            let db = Database::open(&path).unwrap();
            db.services().save(&catalog).unwrap();
        }

        let db = Database::open(&path).unwrap();
        let loaded = db.services().load().unwrap().unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("turnero.db");

        let db = Database::open(&path).unwrap();
        assert!(path.exists());
        assert!(db.schema_version() >= 1);
    }
}
