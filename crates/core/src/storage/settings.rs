//! Booking settings persistence
//!
//! Stores the operator's booking-page settings as a single blob,
//! falling back to stock values when none were saved yet.

use rusqlite::Connection;

use super::records::{RecordStore, SETTINGS};
use crate::error::Result;
use crate::models::BookingSettings;

pub struct SettingsStore<'a> {
    records: RecordStore<'a>,
}

impl<'a> SettingsStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            records: RecordStore::new(conn),
        }
    }

    /// Load settings, with defaults when never saved
    pub fn load(&self) -> Result<BookingSettings> {
        Ok(self.records.load_value(SETTINGS)?.unwrap_or_default())
    }

    /// Save settings
    pub fn save(&self, settings: &BookingSettings) -> Result<()> {
        self.records.save_value(SETTINGS, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn test_defaults_when_unsaved() {
        let db = Database::open_in_memory().unwrap();
        let settings = db.settings().load().unwrap();
        assert_eq!(settings, BookingSettings::default());
    }

    #[test]
    fn test_save_load() {
        let db = Database::open_in_memory().unwrap();
        let store = db.settings();

        let settings = BookingSettings {
            welcome_message: "Reserva tu turno".to_string(),
            public_form_url: "https://example.com/turnos".to_string(),
            contact_phone: Some("+54 11 5555-0000".to_string()),
        };
        store.save(&settings).unwrap();

        assert_eq!(store.load().unwrap(), settings);
    }
}
