//! Record store over flat JSON collections
//!
//! Each collection lives as one JSON document under its key and is
//! rewritten wholesale on every save. An absent key and a corrupt
//! document are distinct outcomes: the first is `Ok(None)`, the second
//! surfaces as `Error::Corrupt` so callers can decide whether to reset
//! or alert.

use chrono::Utc;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::error::{Error, Result};

/// Collection key for the service catalog
pub const SERVICES: &str = "services";
/// Collection key for working-hours slots
pub const TIME_SLOTS: &str = "timeSlots";
/// Collection key for bookings
pub const APPOINTMENTS: &str = "appointments";
/// Key for the booking settings blob
pub const SETTINGS: &str = "settings";

pub struct RecordStore<'a> {
    conn: &'a Connection,
}

impl<'a> RecordStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Load a collection; `Ok(None)` when the key was never written
    pub fn load<T: DeserializeOwned>(&self, collection: &str) -> Result<Option<Vec<T>>> {
        self.load_value(collection)
    }

    /// Load a collection, treating an absent key as empty
    pub fn load_or_empty<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        Ok(self.load(collection)?.unwrap_or_default())
    }

    /// Overwrite a collection in a single synchronous write
    #[instrument(skip(self, records))]
    pub fn save<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<()> {
        self.write_raw(collection, &serde_json::to_string(records)?)
    }

    /// Load a single stored value (non-collection blobs such as settings)
    pub fn load_value<T: DeserializeOwned>(&self, collection: &str) -> Result<Option<T>> {
        match self.read_raw(collection)? {
            Some(json) => {
                let value = serde_json::from_str(&json).map_err(|source| Error::Corrupt {
                    collection: collection.to_string(),
                    source,
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Overwrite a single stored value
    #[instrument(skip(self, value))]
    pub fn save_value<T: Serialize>(&self, collection: &str, value: &T) -> Result<()> {
        self.write_raw(collection, &serde_json::to_string(value)?)
    }

    fn read_raw(&self, collection: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT records_json FROM collections WHERE name = ?1",
            params![collection],
            |row| row.get(0),
        );

        match result {
            Ok(json) => Ok(Some(json)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_raw(&self, collection: &str, json: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO collections (name, records_json, updated_at)
             VALUES (?1, ?2, ?3)",
            params![collection, json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
