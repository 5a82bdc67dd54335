//! Attendance time calculation engine.
//!
//! This crate derives normalized daily time metrics (total work time, on-site
//! time, overtime and midday rest) from raw clock-in/clock-out records, leave
//! notifications and contract baselines, and flags days whose figures
//! contradict the declared rules.

#![warn(missing_docs)]

pub mod api;
pub mod assembly;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod projection;
pub mod time_format;
