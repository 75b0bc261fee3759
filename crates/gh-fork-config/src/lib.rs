//! Configuration and audit log for gh-fork-manager
//!
//! This crate provides:
//! - Platform paths for config, data and cache files
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig) with environment overrides
//! - The append-only audit log of delete outcomes

pub mod app_config;
pub mod audit_log;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use audit_log::{format_entry, AuditLog, AuditSink, MemoryAuditSink};
pub use config_file::load_config_file;
