use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Author of the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_attachment_ids: Vec<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Comment {
    /// A new comment carrying only its text.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }
}
