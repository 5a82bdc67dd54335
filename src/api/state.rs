//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::assembly::DayRecordAssembler;
use crate::calculation::TimeCalculationEngine;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the assembler built from it. Both are
/// read-only, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded attendance configuration.
    config: Arc<ConfigLoader>,
    /// Assembler (and engine) built from the configuration.
    assembler: Arc<DayRecordAssembler>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let assembler = DayRecordAssembler::from_config(config.config());
        Self {
            config: Arc::new(config),
            assembler: Arc::new(assembler),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the month assembler.
    pub fn assembler(&self) -> &DayRecordAssembler {
        &self.assembler
    }

    /// Returns the day calculation engine.
    pub fn engine(&self) -> &TimeCalculationEngine {
        self.assembler.engine()
    }
}
