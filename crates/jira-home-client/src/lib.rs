//! Jira Home Client Library
//!
//! Fetches the dashboard payload from the Jira Home proxy.

pub mod credentials;
pub mod error;

pub use credentials::{
    CredentialChain, CredentialProvider, Credentials, EnvToken, KeyringToken, StaticToken,
};
pub use error::{Error, Result};

use jira_home_core::models::ProjectOverview;
use reqwest::header::AUTHORIZATION;

pub const DEFAULT_PROXY_URL: &str = "http://localhost:7007/api/jira-home";

/// Jira Home proxy client
pub struct ProxyClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET <base>/project` with `Authorization: Bearer <token>`
    pub async fn fetch_project(&self, credentials: &Credentials) -> Result<ProjectOverview> {
        let url = format!("{}/project", self.base_url);
        tracing::debug!("Fetching project data from {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", credentials.token()))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json::<ProjectOverview>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> serde_json::Value {
        json!({
            "self": "https://jira.example/rest/api/2/project/10000",
            "avatarUrls": { "48x48": "https://avatars.example/home-48.png" },
            "name": "Home",
            "key": "HOME",
            "lead": { "displayName": "Pat Lead" },
            "issues": [{
                "id": "1",
                "key": "HOME-1",
                "fields": {
                    "summary": "First",
                    "priority": { "name": "High" },
                    "status": { "name": "To Do" },
                    "assignee": null
                }
            }],
            "assignedToMe": []
        })
    }

    #[tokio::test]
    async fn test_fetch_project_sends_bearer_token() {
        let mock_server = MockServer::start().await;
        let client = ProxyClient::new(format!("{}/api/jira-home/", mock_server.uri()));

        Mock::given(method("GET"))
            .and(path("/api/jira-home/project"))
            .and(header("Authorization", "Bearer portal-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let overview = client
            .fetch_project(&Credentials::new("portal-token"))
            .await
            .unwrap();
        assert_eq!(overview.key, "HOME");
        assert_eq!(overview.issues.len(), 1);
        assert!(overview.assigned_to_me.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_project_failure_message() {
        let mock_server = MockServer::start().await;
        let client = ProxyClient::new(mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/project"))
            .respond_with(
                ResponseTemplate::new(502).set_body_json(json!({ "error": "Bad Gateway" })),
            )
            .mount(&mock_server)
            .await;

        let err = client
            .fetch_project(&Credentials::new("t"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch project data: Bad Gateway");
    }
}
