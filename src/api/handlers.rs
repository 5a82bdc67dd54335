//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assembly::InMemoryAttendanceSource;
use crate::models::MonthlyAttendance;
use crate::projection::project_month;

use super::request::{DayCalculationRequest, MonthCalculationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/day", post(calculate_day_handler))
        .route("/calculate/month", post(calculate_month_handler))
        .route("/calculate/month/compact", post(calculate_month_compact_handler))
        .with_state(state)
}

/// Handler for POST /calculate/day.
///
/// Runs the engine on one day's inputs and returns the day result.
async fn calculate_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<DayCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing day calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(message) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %message, "Invalid contract hours");
        return json_response(StatusCode::BAD_REQUEST, ApiError::validation_error(message));
    }

    let start_time = Instant::now();
    let result = state.engine().compute(
        &request.clock(),
        &request.notifications(),
        &request.context(),
        &request.baseline(),
    );

    info!(
        correlation_id = %correlation_id,
        rules_version = %state.config().rules().version,
        irregular = ?result.irregular,
        duration_us = start_time.elapsed().as_micros(),
        "Day calculation completed"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for POST /calculate/month.
///
/// Assembles a month from the records and contracts in the body.
async fn calculate_month_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month calculation request");

    match assemble(&state, correlation_id, payload) {
        Ok(month) => json_response(StatusCode::OK, month),
        Err(response) => response,
    }
}

/// Handler for POST /calculate/month/compact.
///
/// Same as `/calculate/month`, rendered as short-keyed day records.
async fn calculate_month_compact_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compact month request");

    match assemble(&state, correlation_id, payload) {
        Ok(month) => json_response(StatusCode::OK, project_month(&month)),
        Err(response) => response,
    }
}

fn assemble(
    state: &AppState,
    correlation_id: Uuid,
    payload: Result<Json<MonthCalculationRequest>, JsonRejection>,
) -> Result<MonthlyAttendance, Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return Err(rejection_response(correlation_id, rejection)),
    };

    if let Err(message) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %message, "Invalid contract hours");
        return Err(json_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(message),
        ));
    }

    let staff_id = request.staff_id;
    let target_month = request.target_month.clone();
    let source: InMemoryAttendanceSource = request.into();

    let start_time = Instant::now();
    match state
        .assembler()
        .assemble_month(&source, staff_id, &target_month)
    {
        Ok(month) => {
            info!(
                correlation_id = %correlation_id,
                staff_id,
                target_month = %target_month,
                days = month.days.len(),
                irregular_days = month.irregular_days().len(),
                duration_us = start_time.elapsed().as_micros(),
                "Month calculation completed"
            );
            Ok(month)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Month calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            Err(json_response(api_error.status, api_error.error))
        }
    }
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
