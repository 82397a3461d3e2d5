//! Issue data model

use serde::{Deserialize, Serialize};

/// Status name Jira uses for finished work.
pub const DONE_STATUS: &str = "Done";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub id: String,
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IssueFields {
    pub summary: String,
    #[serde(default)]
    pub priority: Option<NamedField>,
    pub status: NamedField,
    #[serde(default)]
    pub assignee: Option<Assignee>,
}

/// A `{ "name": ... }` object, used for both priority and status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedField {
    pub name: String,
}

/// Assignee is either absent or carries both a display name and an avatar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub display_name: String,
    pub avatar_urls: AvatarUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvatarUrls {
    #[serde(rename = "24x24")]
    pub small: String,
}

impl Issue {
    pub fn status_name(&self) -> &str {
        &self.fields.status.name
    }

    pub fn priority_name(&self) -> Option<&str> {
        self.fields.priority.as_ref().map(|p| p.name.as_str())
    }

    pub fn is_done(&self) -> bool {
        self.status_name() == DONE_STATUS
    }

    /// Display name of the assignee, if any
    pub fn assignee_name(&self) -> Option<&str> {
        self.fields
            .assignee
            .as_ref()
            .map(|a| a.display_name.as_str())
    }
}
