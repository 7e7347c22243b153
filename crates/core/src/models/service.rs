//! Service catalog model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable service offered by the operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    /// Duration in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Display color, "#rrggbb"
    pub color: String,
    pub active: bool,
}

impl Service {
    /// New services start out active
    pub fn new(name: String, duration_minutes: u32, color: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            duration_minutes,
            color,
            active: true,
        }
    }
}
