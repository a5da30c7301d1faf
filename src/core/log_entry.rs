//! Log entry structure

use super::log_data::Data;
use super::log_level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One log event, handed by value to a single handler call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub level: Level,
    pub message: String,
    #[serde(
        default,
        skip_serializing_if = "Data::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub data: Data,
    pub time: DateTime<Utc>,
}

impl Entry {
    /// Create an entry stamped with the current UTC time
    pub fn new(level: Level, message: impl Into<String>, data: Option<Data>) -> Self {
        Self {
            level,
            message: message.into(),
            data: data.unwrap_or_default(),
            time: Utc::now(),
        }
    }
}

/// Stored records may carry `"data": null` for an absent map.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Data, D::Error> {
    Ok(Option::<Data>::deserialize(deserializer)?.unwrap_or_default())
}
