//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads the rule set, the notification code table and the
//! work-type table from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance").unwrap();
//! println!("Loaded rules: {}", config.rules().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceConfig, NotificationEntry, NotificationsFile, RestSection, RuleMetadata, RulesFile,
    TimeOffDeductionPolicy, WorkType, WorkTypesFile,
};
