use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use super::{ApiError, ApiHandler, Result};
use jira_home_jira::{assignee_display_name, project_jql, Error as JiraError};

/// Project details merged with all of its issues and the configured user's share
pub async fn project(
    State(handler): State<Arc<ApiHandler>>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let span = tracing::info_span!("project", request_id = %Uuid::new_v4());

    async move {
        // Callers send a bearer token; it is not checked here
        tracing::debug!(
            authorization = headers.contains_key(AUTHORIZATION),
            "Incoming project request"
        );
        handler.project_overview().await.map(Json)
    }
    .instrument(span)
    .await
}

impl ApiHandler {
    /// Search issues, then fetch project details, then merge. Any failure
    /// ends the request; nothing from an earlier call is returned.
    pub async fn project_overview(&self) -> Result<Value> {
        let project_key = &self.config().project_key;
        tracing::info!(
            "Fetching Jira project details and issues for project key: {}",
            project_key
        );

        let issues = match self.jira_client().search_issues(&project_jql(project_key)).await {
            Ok(results) => results.into_issues(),
            Err(e) => return Err(log_failure("issues", e)),
        };

        let assigned_to_me = assigned_to(&issues, &self.config().username);

        let mut project = match self.jira_client().get_project(project_key).await {
            Ok(project) => project,
            Err(e) => return Err(log_failure("project", e)),
        };

        project.insert("issues".to_string(), Value::Array(issues));
        project.insert("assignedToMe".to_string(), Value::Array(assigned_to_me));

        tracing::info!("Successfully fetched project details and issues");
        Ok(Value::Object(project))
    }
}

/// Issues whose assignee display name equals `username` exactly
pub fn assigned_to(issues: &[Value], username: &str) -> Vec<Value> {
    issues
        .iter()
        .filter(|issue| assignee_display_name(issue) == Some(username))
        .cloned()
        .collect()
}

fn log_failure(what: &str, err: JiraError) -> ApiError {
    match &err {
        JiraError::Status {
            status_text, body, ..
        } => {
            tracing::error!(
                "Failed to fetch {}: {}, Response: {}",
                what,
                status_text,
                body
            );
        }
        other => {
            tracing::error!("Error fetching project details or issues: {}", other);
        }
    }
    ApiError::from(err)
}
