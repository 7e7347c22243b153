//! Appointment storage

use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::instrument;
use uuid::Uuid;

use super::records::{RecordStore, APPOINTMENTS};
use crate::error::Result;
use crate::models::Appointment;

pub struct AppointmentStore<'a> {
    records: RecordStore<'a>,
}

impl<'a> AppointmentStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            records: RecordStore::new(conn),
        }
    }

    /// Load all bookings; `None` when never written
    pub fn load(&self) -> Result<Option<Vec<Appointment>>> {
        self.records.load(APPOINTMENTS)
    }

    /// Load all bookings, treating absent as empty
    pub fn load_or_empty(&self) -> Result<Vec<Appointment>> {
        self.records.load_or_empty(APPOINTMENTS)
    }

    /// Overwrite the whole booking collection
    #[instrument(skip(self, appointments), fields(count = appointments.len()))]
    pub fn save(&self, appointments: &[Appointment]) -> Result<()> {
        self.records.save(APPOINTMENTS, appointments)
    }

    /// Find a booking by id
    pub fn find(&self, id: Uuid) -> Result<Option<Appointment>> {
        Ok(self.load_or_empty()?.into_iter().find(|a| a.id == id))
    }

    /// All bookings on one date, in stored order
    pub fn for_date(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        Ok(self
            .load_or_empty()?
            .into_iter()
            .filter(|a| a.date == date)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STATUS_CONFIRMED;
    use crate::storage::Database;
    use chrono::{NaiveTime, Utc};

    fn make_appointment(date: &str, time: &str) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            date: date.parse().unwrap(),
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            client_name: "Ana Pérez".to_string(),
            client_phone: "1155550000".to_string(),
            client_email: "ana@example.com".to_string(),
            service_id: None,
            notes: String::new(),
            status: STATUS_CONFIRMED.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_for_date_filters() {
        let db = Database::open_in_memory().unwrap();
        let store = db.appointments();

        let monday = make_appointment("2024-06-10", "10:00");
        let tuesday = make_appointment("2024-06-11", "09:00");
        store.save(&[monday.clone(), tuesday]).unwrap();

        let on_monday = store.for_date("2024-06-10".parse().unwrap()).unwrap();
        assert_eq!(on_monday, vec![monday]);
    }
}
