//! Story-related types sent to and returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric identifier the service assigns to a story.
pub type StoryID = u64;

/// A story. Every field is optional so the same type serves as a partial
/// update payload: unset fields are not serialized.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Story {
    /// Assigned by the service; leave unset when creating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<StoryID>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<StoryType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_state: Option<StoryState>,

    /// Point estimate. Only features are estimable by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,

    /// Only meaningful for releases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner_ids: Vec<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoryType {
    Feature,
    Bug,
    Chore,
    Release,
}

impl std::fmt::Display for StoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StoryType::Feature => "feature",
                StoryType::Bug => "bug",
                StoryType::Chore => "chore",
                StoryType::Release => "release",
            }
        )
    }
}

/// Workflow state of a story.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoryState {
    Unscheduled,
    Unstarted,
    Planned,
    Started,
    Finished,
    Delivered,
    Accepted,
    Rejected,
}

impl std::fmt::Display for StoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StoryState::Unscheduled => "unscheduled",
                StoryState::Unstarted => "unstarted",
                StoryState::Planned => "planned",
                StoryState::Started => "started",
                StoryState::Finished => "finished",
                StoryState::Delivered => "delivered",
                StoryState::Accepted => "accepted",
                StoryState::Rejected => "rejected",
            }
        )
    }
}

/// A label attached to a story. New labels may be sent by name alone.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Label {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_display_matches_wire_name() {
        for state in [
            StoryState::Unscheduled,
            StoryState::Started,
            StoryState::Delivered,
            StoryState::Rejected,
        ] {
            let wire = serde_json::to_string(&state).unwrap();
            assert_eq!(wire, format!("\"{}\"", state));
        }
    }

    #[test]
    fn partial_story_serializes_only_set_fields() {
        let story = Story {
            current_state: Some(StoryState::Delivered),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&story).unwrap(),
            r#"{"current_state":"delivered"}"#
        );
    }
}
