//! API handlers

pub mod health;
pub mod project;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

use jira_home_core::models::JiraConfig;
use jira_home_jira::JiraClient;

/// API error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Upstream answered with a non-success status; relayed as is
    #[error("{status_text}")]
    Upstream {
        status: StatusCode,
        status_text: String,
    },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<jira_home_jira::Error> for ApiError {
    fn from(err: jira_home_jira::Error) -> Self {
        match err {
            jira_home_jira::Error::Status {
                status,
                status_text,
                ..
            } => Self::Upstream {
                status: StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                status_text,
            },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Request handler state; configuration is fixed for the process lifetime
pub struct ApiHandler {
    config: JiraConfig,
    jira: JiraClient,
}

impl ApiHandler {
    pub fn new(config: JiraConfig) -> Self {
        let jira = JiraClient::from_config(&config);
        Self { config, jira }
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    pub(crate) fn jira_client(&self) -> &JiraClient {
        &self.jira
    }
}

/// `GET /health` and `GET /project`, unprefixed
pub fn routes(handler: Arc<ApiHandler>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/project", get(project::project))
        .with_state(handler)
}
