//! JIRA authentication

use std::fmt;

/// Value sent in the `Authorization` header of every upstream request.
#[derive(Clone)]
pub struct JiraAuth {
    header: String,
}

impl JiraAuth {
    /// Use `token` verbatim; its scheme is the deployment's business
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            header: token.into(),
        }
    }

    /// Build a `Basic` header from an account name and API token
    pub fn basic(username: &str, api_token: &str) -> Self {
        use base64::Engine;
        let credentials = format!("{}:{}", username, api_token);
        Self {
            header: format!(
                "Basic {}",
                base64::engine::general_purpose::STANDARD.encode(credentials)
            ),
        }
    }

    pub fn header_value(&self) -> &str {
        &self.header
    }
}

impl fmt::Debug for JiraAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraAuth").field("header", &"***").finish()
    }
}
