//! Application configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const ENV_PROJECT_KEY: &str = "JIRA_PROJECT_KEY";
pub const ENV_USERNAME: &str = "JIRA_USERNAME";
pub const ENV_BASE_URL: &str = "JIRA_BASE_URL";
pub const ENV_TOKEN: &str = "JIRA_TOKEN";
pub const ENV_EMAIL: &str = "JIRA_EMAIL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub version: String,
    pub jira: JiraConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Upstream settings, fixed per deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JiraConfig {
    pub project_key: String,
    /// Display name matched exactly against each issue's assignee
    pub username: String,
    /// REST API root, e.g. `https://jira.example.com/rest/api/2`
    pub base_url: String,
    /// Sent verbatim as the `Authorization` header, unless `email` is set
    pub token: String,
    /// Account email; when present `token` is an API token sent as Basic auth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub base_path: String,
    pub log_level: String,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.jira.validate()?;
        self.server.validate()?;
        Ok(())
    }

    /// Override Jira settings from the process environment
    pub fn apply_env_overrides(&mut self) -> Vec<&'static str> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Override Jira settings from `lookup`; empty values are ignored.
    /// Returns the names of the variables that were applied.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<&'static str>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut applied = Vec::new();

        let fields = [
            (ENV_PROJECT_KEY, &mut self.jira.project_key),
            (ENV_USERNAME, &mut self.jira.username),
            (ENV_BASE_URL, &mut self.jira.base_url),
            (ENV_TOKEN, &mut self.jira.token),
        ];

        for (name, field) in fields {
            if let Some(value) = lookup(name) {
                *field = value;
                applied.push(name);
            }
        }

        if let Some(email) = lookup(ENV_EMAIL) {
            self.jira.email = Some(email);
            applied.push(ENV_EMAIL);
        }

        applied
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            jira: JiraConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl JiraConfig {
    /// Validate Jira configuration
    pub fn validate(&self) -> Result<()> {
        if self.project_key.trim().is_empty() {
            return Err(Error::Validation("Project key cannot be empty".to_string()));
        }

        // Interpolated into JQL unescaped
        if !self
            .project_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::Validation(format!(
                "Invalid project key '{}'. Only letters, digits and '_' are allowed",
                self.project_key
            )));
        }

        if self.username.trim().is_empty() {
            return Err(Error::Validation("Username cannot be empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Validation(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        if self.token.trim().is_empty() {
            return Err(Error::Validation("Token cannot be empty".to_string()));
        }

        if let Some(email) = &self.email {
            if email.trim().is_empty() {
                return Err(Error::Validation("Email cannot be empty when set".to_string()));
            }
        }

        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl ServerConfig {
    /// Validate server configuration
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            return Err(Error::Validation(format!(
                "Invalid listen address '{}'",
                self.listen_addr
            )));
        }

        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            return Err(Error::Validation(
                "Base path must be empty or start with '/'".to_string(),
            ));
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Validation(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        Ok(())
    }

    /// Route prefix, or `None` when routes are served from the root
    pub fn mount_path(&self) -> Option<&str> {
        let path = self.base_path.trim_end_matches('/');
        if path.is_empty() {
            None
        } else {
            Some(path)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:7007".to_string(),
            base_path: "/api/jira-home".to_string(),
            log_level: "info".to_string(),
        }
    }
}
