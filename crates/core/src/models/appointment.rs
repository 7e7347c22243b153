//! Appointment model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timefmt;

/// The only status the system currently produces
pub const STATUS_CONFIRMED: &str = "confirmed";

/// A confirmed booking for one client at one (date, time)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "timefmt")]
    pub time: NaiveTime,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    /// Soft reference into the service catalog; may dangle
    pub service_id: Option<Uuid>,
    pub notes: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
