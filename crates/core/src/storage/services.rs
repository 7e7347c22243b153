//! Service catalog storage

use rusqlite::Connection;
use tracing::instrument;
use uuid::Uuid;

use super::records::{RecordStore, SERVICES};
use crate::error::Result;
use crate::models::Service;

pub struct ServiceStore<'a> {
    records: RecordStore<'a>,
}

impl<'a> ServiceStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            records: RecordStore::new(conn),
        }
    }

    /// Load the catalog; `None` when it was never written
    pub fn load(&self) -> Result<Option<Vec<Service>>> {
        self.records.load(SERVICES)
    }

    /// Load the catalog, treating absent as empty
    pub fn load_or_empty(&self) -> Result<Vec<Service>> {
        self.records.load_or_empty(SERVICES)
    }

    /// Overwrite the whole catalog
    #[instrument(skip(self, services), fields(count = services.len()))]
    pub fn save(&self, services: &[Service]) -> Result<()> {
        self.records.save(SERVICES, services)
    }

    /// Find a service by id
    pub fn find(&self, id: Uuid) -> Result<Option<Service>> {
        Ok(self.load_or_empty()?.into_iter().find(|s| s.id == id))
    }
}
