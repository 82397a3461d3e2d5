pub mod config;
pub mod issue;
pub mod project;

pub use config::{Config, JiraConfig, ServerConfig};
pub use issue::{Assignee, AvatarUrls, Issue, IssueFields, NamedField};
pub use project::{ProjectAvatarUrls, ProjectLead, ProjectOverview};
