//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod clock;
mod contract;
mod day_result;
mod monthly;
mod notification;
mod overtime_context;

pub use attendance::AttendanceRecord;
pub use clock::ClockPair;
pub use contract::{ContractBaseline, HolidayContract, JobContract};
pub use day_result::{DayCalculationResult, IrregularReason, TotalWorkOrigin};
pub use monthly::{AttendanceHeader, DayEntry, MonthlyAttendance};
pub use notification::{NotificationCategory, NotificationPair};
pub use overtime_context::OvertimeContext;
