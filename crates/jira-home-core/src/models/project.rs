//! Project data model, as returned by the proxy's `/project` route

use serde::{Deserialize, Serialize};

use super::issue::Issue;

/// Project details merged with the project's issues.
///
/// The proxy passes the upstream project object through untouched and adds
/// `issues` and `assignedToMe`; only the fields the dashboard renders are
/// modelled here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    #[serde(rename = "self")]
    pub self_url: String,
    pub avatar_urls: ProjectAvatarUrls,
    pub name: String,
    pub key: String,
    pub lead: ProjectLead,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub assigned_to_me: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectAvatarUrls {
    #[serde(rename = "48x48")]
    pub large: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLead {
    pub display_name: String,
}
