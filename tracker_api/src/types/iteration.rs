//! Iteration types returned by the `/iterations` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Story;

/// A fixed-length block of time and the stories scheduled into it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Iteration {
    pub number: u32,

    pub project_id: u64,

    /// Length in weeks.
    pub length: u32,

    /// Fraction of normal capacity the team has (1.0 = full strength).
    pub team_strength: f32,

    pub stories: Vec<Story>,

    pub start: Option<DateTime<Utc>>,

    pub finish: Option<DateTime<Utc>>,

    pub velocity: f32,

    pub points: u32,

    pub accepted_points: u32,

    pub effective_points: f32,

    // Analytics sub-documents, passed through untouched.
    accepted: Option<serde_json::Value>,

    created: Option<serde_json::Value>,

    analytics: Option<serde_json::Value>,

    pub kind: String,
}

impl Iteration {
    /// Raw analytics document, if the service included it.
    pub fn analytics(&self) -> Option<&serde_json::Value> {
        self.analytics.as_ref()
    }

    pub fn accepted(&self) -> Option<&serde_json::Value> {
        self.accepted.as_ref()
    }

    pub fn created(&self) -> Option<&serde_json::Value> {
        self.created.as_ref()
    }
}
