//! Views the dashboard derives from a project overview

use crate::models::{Issue, ProjectOverview};

/// Issues the dashboard shows, split into its three tables
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViews {
    /// Every issue whose status is not exactly "Done", in upstream order
    pub open_issues: Vec<Issue>,
    /// Currently the same selection as `open_issues`
    pub incoming_issues: Vec<Issue>,
    /// Taken verbatim from the proxy response
    pub assigned_to_me: Vec<Issue>,
}

impl DashboardViews {
    pub fn from_overview(overview: &ProjectOverview) -> Self {
        let open_issues = open_issues(&overview.issues);

        Self {
            incoming_issues: open_issues.clone(),
            open_issues,
            assigned_to_me: overview.assigned_to_me.clone(),
        }
    }
}

/// Issues not in the "Done" status (case-sensitive), order preserved
pub fn open_issues(issues: &[Issue]) -> Vec<Issue> {
    issues.iter().filter(|i| !i.is_done()).cloned().collect()
}
