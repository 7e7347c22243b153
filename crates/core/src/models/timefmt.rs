//! Serde helpers for the "HH:MM" wire format
//!
//! Slot and appointment times are persisted as zero-padded "HH:MM"
//! strings, matching the stored collection layout.

use chrono::NaiveTime;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serializer};

const HHMM: &str = "%H:%M";

pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.format(HHMM).to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&s, HHMM).map_err(DeError::custom)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        time: NaiveTime,
    }

    #[test]
    fn test_serializes_zero_padded() {
        let wrapper = Wrapper {
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        assert_eq!(serde_json::to_string(&wrapper).unwrap(), r#"{"time":"09:00"}"#);
    }

    #[test]
    fn test_rejects_seconds() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"time":"09:00:00"}"#);
        assert!(result.is_err());
    }
}
