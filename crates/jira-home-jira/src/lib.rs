//! Jira Home upstream integration
//!
//! Client library for the two Jira REST endpoints the proxy calls.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::JiraAuth;
pub use client::{project_jql, JiraClient};
pub use error::{Error, Result};
pub use types::*;
