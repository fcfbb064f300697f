use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An employee record. Field names serialize camelCase to match the
/// legacy API payloads consumed by the Angular client.
///
/// `id == 0` marks a record that has not been persisted yet (create
/// path); the store assigns the real id. `created_date` is set server
/// side at creation time and any client-supplied value is discarded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_date: None,
        }
    }
}
