//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! configurations from YAML files.

use chrono::Duration;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::calculation::{NotificationCatalog, RestTimeRule, TimeCalculationEngine};
use crate::error::{EngineError, EngineResult};
use crate::time_format::{daily_hours_to_duration, parse_clock_time, MAX_DAILY_HOURS};

use super::types::{
    AttendanceConfig, NotificationsFile, RuleMetadata, RulesFile, WorkType, WorkTypesFile,
};

/// Loads and provides access to attendance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/attendance/
/// ├── rules.yaml          # Rule set metadata, rest rule, time-off policy
/// ├── notifications.yaml  # Notification code table
/// └── work_types.yaml     # Contract code to work type
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance").unwrap();
/// let work_type = loader.get_work_type(1).unwrap();
/// println!("Work type: {}", work_type.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if any file is missing, is not valid YAML, or contains values the
    /// engine cannot use: a malformed midday boundary, a negative rest, a
    /// time-off code without hours, or hours outside `0..=24`.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<RulesFile>(&path.join("rules.yaml"))?;
        let notifications =
            Self::load_yaml::<NotificationsFile>(&path.join("notifications.yaml"))?;
        let work_types = Self::load_yaml::<WorkTypesFile>(&path.join("work_types.yaml"))?;

        let rest_rule = Self::build_rest_rule(&rules)?;
        let catalog = NotificationCatalog::new(notifications.notifications)?;
        Self::validate_work_types(&work_types.work_types)?;

        debug!(
            rules = %rules.metadata.name,
            version = %rules.metadata.version,
            notification_codes = catalog.len(),
            work_types = work_types.work_types.len(),
            "Loaded attendance configuration"
        );

        let config = AttendanceConfig::new(
            rules.metadata,
            rest_rule,
            rules.time_off_deduction,
            catalog,
            work_types.work_types,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn build_rest_rule(rules: &RulesFile) -> EngineResult<RestTimeRule> {
        if rules.rest.nominal_minutes < 0 {
            return Err(EngineError::InvalidConfiguration {
                key: "rest.nominal_minutes".to_string(),
                message: format!("must not be negative, got {}", rules.rest.nominal_minutes),
            });
        }

        let midday =
            parse_clock_time(&rules.rest.midday).ok_or_else(|| EngineError::InvalidConfiguration {
                key: "rest.midday".to_string(),
                message: format!("expected HH:MM, got '{}'", rules.rest.midday),
            })?;

        let nominal_rest = Duration::try_minutes(rules.rest.nominal_minutes)
            .filter(|rest| *rest <= Duration::hours(MAX_DAILY_HOURS))
            .ok_or_else(|| EngineError::InvalidConfiguration {
                key: "rest.nominal_minutes".to_string(),
                message: format!("must not exceed a day, got {}", rules.rest.nominal_minutes),
            })?;

        Ok(RestTimeRule::new(nominal_rest, midday))
    }

    fn validate_work_types(work_types: &HashMap<u32, WorkType>) -> EngineResult<()> {
        for (code, work_type) in work_types {
            if daily_hours_to_duration(work_type.work_hours).is_none() {
                return Err(EngineError::InvalidConfiguration {
                    key: format!("work_types.{code}"),
                    message: format!(
                        "work_hours must be between 0 and {MAX_DAILY_HOURS}, got {}",
                        work_type.work_hours
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying attendance configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the rule set metadata.
    pub fn rules(&self) -> &RuleMetadata {
        self.config.metadata()
    }

    /// Gets a work type by its contract code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/attendance")?;
    /// let work_type = loader.get_work_type(2)?;
    /// println!("{} works {}h", work_type.name, work_type.work_hours);
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn get_work_type(&self, code: u32) -> EngineResult<&WorkType> {
        self.config
            .work_types()
            .get(&code)
            .ok_or(EngineError::UnknownWorkType { code })
    }

    /// Builds a calculation engine from the loaded rules and catalog.
    pub fn engine(&self) -> TimeCalculationEngine {
        TimeCalculationEngine::from_config(&self.config)
    }
}
