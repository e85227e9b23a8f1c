use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Person {
    pub id: u64,

    pub name: String,

    pub email: String,

    pub initials: String,

    pub username: String,

    pub kind: String,
}

/// A person's role within the project.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ProjectMembership {
    pub id: u64,

    pub person: Person,

    /// `owner`, `member`, or `viewer`.
    pub role: String,

    /// Hex color used for the member in the project view.
    pub project_color: String,

    pub wants_comment_notification_emails: bool,

    pub kind: String,
}
