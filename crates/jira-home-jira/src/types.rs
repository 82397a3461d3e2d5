//! JIRA API types
//!
//! Responses are passed through to the dashboard without schema validation,
//! so they are kept as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub issues: Option<Vec<Value>>,
}

impl SearchResults {
    /// The issue list, empty when the field is absent or null
    pub fn into_issues(self) -> Vec<Value> {
        self.issues.unwrap_or_default()
    }
}

/// Body of `GET /project/<key>`
pub type ProjectDetails = Map<String, Value>;

/// Assignee display name of a raw issue, if it has one
pub fn assignee_display_name(issue: &Value) -> Option<&str> {
    issue
        .get("fields")?
        .get("assignee")?
        .get("displayName")?
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_or_null_issues() {
        let results: SearchResults = serde_json::from_value(json!({ "total": 0 })).unwrap();
        assert!(results.into_issues().is_empty());

        let results: SearchResults = serde_json::from_value(json!({ "issues": null })).unwrap();
        assert!(results.into_issues().is_empty());
    }

    #[test]
    fn test_assignee_display_name() {
        let assigned = json!({ "fields": { "assignee": { "displayName": "Jane Doe" } } });
        let unassigned = json!({ "fields": { "assignee": null } });
        let bare = json!({ "key": "HOME-1" });

        assert_eq!(assignee_display_name(&assigned), Some("Jane Doe"));
        assert_eq!(assignee_display_name(&unassigned), None);
        assert_eq!(assignee_display_name(&bare), None);
    }
}
