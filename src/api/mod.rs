//! HTTP API module for the Attendance Engine.
//!
//! This module exposes the day calculation and the month assembly over JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayCalculationRequest, MonthCalculationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
