pub mod error;
pub mod models;
pub mod storage;
pub mod views;

pub use error::{Error, Result};
pub use views::DashboardViews;
