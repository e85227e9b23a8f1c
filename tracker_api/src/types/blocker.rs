use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Something preventing a story from moving forward.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Blocker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,

    /// May reference another story as `#1234`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
