use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Person;

/// One entry of a story's activity feed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Activity {
    pub kind: String,

    pub guid: String,

    pub project_version: u64,

    /// Human-readable summary, e.g. "Luke Skywalker started this feature".
    pub message: String,

    pub highlight: String,

    // Change and resource payloads vary by activity kind.
    pub changes: Vec<serde_json::Value>,

    pub primary_resources: Vec<serde_json::Value>,

    pub performed_by: Option<Person>,

    pub occurred_at: Option<DateTime<Utc>>,
}
