//! # Configuration
//!
//! Service endpoint configuration shared by the Salesdesk apps.

pub mod app;

pub use app::{AppConfig, ConfigError, ServiceUrls};
