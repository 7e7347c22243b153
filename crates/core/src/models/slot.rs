//! Time slot model

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timefmt;

/// A bookable time-of-day unit within the operator's working hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: Uuid,
    #[serde(with = "timefmt")]
    pub time: NaiveTime,
    pub available: bool,
    /// Service this slot is reserved for, if any
    pub service_id: Option<Uuid>,
}

impl TimeSlot {
    pub fn new(time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            available: true,
            service_id: None,
        }
    }
}
