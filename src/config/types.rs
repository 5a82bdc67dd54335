//! Configuration types for attendance calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calculation::{NotificationCatalog, RestTimeRule};
use crate::models::NotificationCategory;
use crate::time_format::hours_to_duration;

/// Identifying information about a rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleMetadata {
    /// Human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
}

/// Rest-time section of `rules.yaml`, as written in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct RestSection {
    /// The nominal midday rest, in minutes.
    pub nominal_minutes: i64,
    /// The midday boundary a shift must cross, as `HH:MM`.
    pub midday: String,
}

/// How time-off notifications are treated when computing on-site time for a
/// day whose total work time was taken from the clock span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffDeductionPolicy {
    /// The clock span already excludes the time off; do not subtract it again.
    #[default]
    SkipWhenClockDerived,
    /// Always subtract the time-off duration.
    Always,
}

/// Contents of `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesFile {
    /// Rule set name and version.
    #[serde(flatten)]
    pub metadata: RuleMetadata,
    /// Rest-time rule parameters.
    pub rest: RestSection,
    /// Time-off deduction policy.
    #[serde(default)]
    pub time_off_deduction: TimeOffDeductionPolicy,
}

/// A notification code entry from `notifications.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEntry {
    /// The human-readable notification name.
    pub name: String,
    /// The category the code belongs to.
    pub category: NotificationCategory,
    /// Fixed duration in hours, required for time-off entries.
    #[serde(default)]
    pub hours: Option<Decimal>,
}

/// Contents of `notifications.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsFile {
    /// Map of notification code to entry.
    pub notifications: HashMap<String, NotificationEntry>,
}

/// A work type (contract kind) from `work_types.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkType {
    /// The human-readable label, e.g. "Full-time".
    pub name: String,
    /// Standard daily work hours for the work type.
    pub work_hours: Decimal,
}

impl WorkType {
    /// Returns the standard daily work time as a duration.
    pub fn work_time(&self) -> Duration {
        hours_to_duration(self.work_hours)
    }
}

/// Contents of `work_types.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkTypesFile {
    /// Map of contract code to work type.
    pub work_types: HashMap<u32, WorkType>,
}

/// The complete attendance configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AttendanceConfig {
    metadata: RuleMetadata,
    rest_rule: RestTimeRule,
    time_off_deduction: TimeOffDeductionPolicy,
    catalog: NotificationCatalog,
    work_types: HashMap<u32, WorkType>,
}

impl AttendanceConfig {
    /// Creates a new AttendanceConfig from its component parts.
    pub fn new(
        metadata: RuleMetadata,
        rest_rule: RestTimeRule,
        time_off_deduction: TimeOffDeductionPolicy,
        catalog: NotificationCatalog,
        work_types: HashMap<u32, WorkType>,
    ) -> Self {
        Self {
            metadata,
            rest_rule,
            time_off_deduction,
            catalog,
            work_types,
        }
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    /// Returns the configured rest-time rule.
    pub fn rest_rule(&self) -> &RestTimeRule {
        &self.rest_rule
    }

    /// Returns the time-off deduction policy.
    pub fn time_off_deduction(&self) -> TimeOffDeductionPolicy {
        self.time_off_deduction
    }

    /// Returns the notification catalog.
    pub fn catalog(&self) -> &NotificationCatalog {
        &self.catalog
    }

    /// Returns all work types keyed by contract code.
    pub fn work_types(&self) -> &HashMap<u32, WorkType> {
        &self.work_types
    }
}
