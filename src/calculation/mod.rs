//! Calculation logic for the Attendance Engine.
//!
//! This module contains the notification catalog, the midday rest rule, the
//! total work time decision, overtime and on-site time calculations, and the
//! [`TimeCalculationEngine`] that combines them into one result per day.

mod engine;
mod notification_catalog;
mod overtime;
mod real_site_time;
mod rest_time;
mod work_time;

pub use engine::TimeCalculationEngine;
pub use notification_catalog::NotificationCatalog;
pub use overtime::{OvertimeResult, calculate_overtime};
pub use real_site_time::calculate_real_site_time;
pub use rest_time::{
    DEFAULT_MIDDAY_HOUR, DEFAULT_NOMINAL_REST_MINUTES, RestTimeRule, applicable_rest,
};
pub use work_time::{NotificationSummary, TotalWorkDecision, decide_total_work_time};
