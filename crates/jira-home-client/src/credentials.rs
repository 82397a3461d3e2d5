//! Caller identity used to authenticate against the proxy

use std::fmt;

use crate::{Error, Result};

pub const ENV_TOKEN: &str = "JIRA_HOME_TOKEN";
pub const DEFAULT_KEYRING_SERVICE: &str = "jira-home";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("token", &"***").finish()
    }
}

/// Source of the bearer token the dashboard presents to the proxy
pub trait CredentialProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn get_credentials(&self) -> Result<Credentials>;
}

/// Token given up front, e.g. on the command line
pub struct StaticToken(pub String);

impl CredentialProvider for StaticToken {
    fn name(&self) -> &'static str {
        "static"
    }

    fn get_credentials(&self) -> Result<Credentials> {
        if self.0.trim().is_empty() {
            return Err(Error::Credentials("Token is empty".to_string()));
        }
        Ok(Credentials::new(self.0.clone()))
    }
}

/// Token read from an environment variable
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(ENV_TOKEN)
    }
}

impl CredentialProvider for EnvToken {
    fn name(&self) -> &'static str {
        "env"
    }

    fn get_credentials(&self) -> Result<Credentials> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(Credentials::new(token)),
            _ => Err(Error::Credentials(format!("{} is not set", self.var))),
        }
    }
}

/// Token stored in the OS keyring
pub struct KeyringToken {
    service: String,
    user: String,
}

impl KeyringToken {
    pub fn new(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    /// Store `token` for later runs
    pub fn store(&self, token: &str) -> Result<()> {
        keyring::Entry::new(&self.service, &self.user)?.set_password(token)?;
        Ok(())
    }
}

impl CredentialProvider for KeyringToken {
    fn name(&self) -> &'static str {
        "keyring"
    }

    fn get_credentials(&self) -> Result<Credentials> {
        let entry = keyring::Entry::new(&self.service, &self.user)?;
        Ok(Credentials::new(entry.get_password()?))
    }
}

/// Tries each provider in order and returns the first token found
#[derive(Default)]
pub struct CredentialChain {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl CredentialChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl CredentialProvider for CredentialChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn get_credentials(&self) -> Result<Credentials> {
        let mut last_error = None;

        for provider in &self.providers {
            match provider.get_credentials() {
                Ok(credentials) => {
                    tracing::debug!("Using credentials from {}", provider.name());
                    return Ok(credentials);
                }
                Err(e) => {
                    tracing::debug!("No credentials from {}: {}", provider.name(), e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| Error::Credentials("No credential provider configured".to_string())))
    }
}
