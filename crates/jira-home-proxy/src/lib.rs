//! Jira Home Proxy Library
//!
//! Proxy service exposed as a library for testing.

pub mod api;
pub mod server;

pub use api::{ApiError, ApiHandler};
pub use server::{ProxyServer, ServerError};
