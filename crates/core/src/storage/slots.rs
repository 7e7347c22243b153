//! Time slot storage

use rusqlite::Connection;
use tracing::instrument;
use uuid::Uuid;

use super::records::{RecordStore, TIME_SLOTS};
use crate::error::Result;
use crate::models::TimeSlot;

pub struct SlotStore<'a> {
    records: RecordStore<'a>,
}

impl<'a> SlotStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            records: RecordStore::new(conn),
        }
    }

    /// Load the working hours; `None` when never written
    pub fn load(&self) -> Result<Option<Vec<TimeSlot>>> {
        self.records.load(TIME_SLOTS)
    }

    /// Load the working hours, treating absent as empty
    pub fn load_or_empty(&self) -> Result<Vec<TimeSlot>> {
        self.records.load_or_empty(TIME_SLOTS)
    }

    /// Overwrite the whole slot collection
    #[instrument(skip(self, slots), fields(count = slots.len()))]
    pub fn save(&self, slots: &[TimeSlot]) -> Result<()> {
        self.records.save(TIME_SLOTS, slots)
    }

    /// Find a slot by id
    pub fn find(&self, id: Uuid) -> Result<Option<TimeSlot>> {
        Ok(self.load_or_empty()?.into_iter().find(|s| s.id == id))
    }
}
