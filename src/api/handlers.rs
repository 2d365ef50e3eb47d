//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{preview_batch, report_totals};
use crate::error::EngineError;
use crate::export::{download_filename, period_header, sheet_row};
use crate::models::{CandidateBase, PayrollLine, PayrollRun};

use super::request::{
    DownloadRequest, PayrollAction, PayrollQuery, PreviewRequest, PushRequest, SaveRequest,
};
use super::response::{ApiError, ApiErrorResponse, PreviewResponse, PushResponse, SaveResponse};
use super::state::AppState;

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/candidates",
            get(list_candidates_handler).post(create_candidate_handler),
        )
        .route("/payroll", post(payroll_handler))
        .route("/payroll/runs/:id", get(get_run_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON body rejection to a 400 error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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
    ApiErrorResponse::bad_request(error)
}

/// Decodes an action body into its typed request.
fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiErrorResponse> {
    serde_json::from_value(body)
        .map_err(|err| ApiErrorResponse::bad_request(ApiError::validation_error(err.to_string())))
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidRequest {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn required_rows(rows: Option<Vec<PayrollLine>>) -> Result<Vec<PayrollLine>, EngineError> {
    rows.ok_or_else(|| invalid("rows", "rows array required"))
}

/// Handler for GET /candidates.
///
/// Lists candidate summaries, newest first.
async fn list_candidates_handler(State(state): State<AppState>) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    let candidates = state.store().list_candidates().inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Candidate listing failed");
    })?;

    info!(
        correlation_id = %correlation_id,
        count = candidates.len(),
        "Listed candidates"
    );
    Ok(json_response(StatusCode::OK, candidates))
}

/// Handler for POST /candidates.
///
/// Stores a candidate under a fresh identifier and returns its summary.
async fn create_candidate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CandidateBase>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing candidate creation");

    let candidate = match payload {
        Ok(Json(candidate)) => candidate,
        Err(rejection) => return Err(rejection_error(correlation_id, rejection)),
    };
    if candidate.candidate_name.trim().is_empty() {
        return Err(invalid("candidate_name", "candidate_name required").into());
    }

    let summary = state.store().insert_candidate(candidate)?;
    info!(
        correlation_id = %correlation_id,
        candidate_uuid = %summary.candidate_uuid,
        "Candidate created"
    );
    Ok(json_response(StatusCode::CREATED, summary))
}

/// Handler for GET /payroll/runs/:id.
async fn get_run_handler(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let run_id = Uuid::parse_str(&id).map_err(|_| EngineError::RecordNotFound { id: id.clone() })?;
    let stored = state.store().get_run(run_id)?;
    debug!(payroll_run_id = %run_id, items = stored.items.len(), "Loaded payroll run");
    Ok(json_response(StatusCode::OK, stored))
}

/// Handler for POST /payroll.
///
/// Dispatches on the `action` query parameter.
async fn payroll_handler(
    State(state): State<AppState>,
    Query(query): Query<PayrollQuery>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let Some(action_name) = query.action.filter(|action| !action.trim().is_empty()) else {
        warn!(correlation_id = %correlation_id, "Payroll request without action");
        return ApiErrorResponse::bad_request(ApiError::missing_action()).into_response();
    };
    let Some(action) = PayrollAction::parse(&action_name) else {
        warn!(correlation_id = %correlation_id, action = %action_name, "Unsupported payroll action");
        return ApiErrorResponse::from(EngineError::UnsupportedAction {
            action: action_name,
        })
        .into_response();
    };
    info!(correlation_id = %correlation_id, action = %action_name, "Processing payroll request");

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return rejection_error(correlation_id, rejection).into_response(),
    };

    let start_time = Instant::now();
    let result = match action {
        PayrollAction::Preview => preview(&state, body),
        PayrollAction::PushToSheet => push_to_sheet(&state, body).await,
        PayrollAction::Download => download(&state, body).await,
        PayrollAction::Save => save(&state, body),
    };

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                action = %action_name,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll request completed successfully"
            );
            response
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                action = %action_name,
                code = %err.error.code,
                error = %err.error.message,
                "Payroll request failed"
            );
            err.into_response()
        }
    }
}

/// Computes one line per matched candidate plus report totals.
fn preview(state: &AppState, body: Value) -> HandlerResult {
    let request: PreviewRequest = decode(body)?;
    if request.candidates.is_empty() {
        return Err(invalid("candidates", "candidates array required").into());
    }

    let ids: Vec<String> = request
        .candidates
        .iter()
        .map(|candidate| candidate.id.clone())
        .collect();
    let bases = state.store().fetch_candidates(&ids)?;

    let rows = preview_batch(&request.candidates, &bases);
    let totals = report_totals(&rows);
    debug!(
        requested = request.candidates.len(),
        computed = rows.len(),
        total_earnings = %totals.total_earnings,
        "Preview computed"
    );
    Ok(json_response(StatusCode::OK, PreviewResponse { rows, totals }))
}

/// Replaces the sheet's data range with the posted rows.
async fn push_to_sheet(state: &AppState, body: Value) -> HandlerResult {
    let request: PushRequest = decode(body)?;
    let rows: Vec<Vec<String>> = required_rows(request.rows)?.iter().map(sheet_row).collect();
    let sheet_settings = state.config().sheet();

    let _guard = state.sheet_lock().lock().await;
    state.sheet().clear_range(&sheet_settings.data_range())?;
    state.sheet().write_rows(&sheet_settings.data_start(), &rows)?;

    debug!(rows = rows.len(), "Pushed rows to sheet");
    Ok(json_response(StatusCode::OK, PushResponse { success: true }))
}

/// Writes the period header and rows, exports the sheet, then clears the rows.
async fn download(state: &AppState, body: Value) -> HandlerResult {
    let request: DownloadRequest = decode(body)?;
    let rows: Vec<Vec<String>> = required_rows(request.rows)?.iter().map(sheet_row).collect();
    let sheet_settings = state.config().sheet();
    let exporter = state.exporter();

    let document = {
        let _guard = state.sheet_lock().lock().await;
        if let Some(header_text) = period_header(request.from_date, request.to_date) {
            state
                .sheet()
                .write_cell(&sheet_settings.period_header_cell(), &header_text)?;
        }
        state.sheet().clear_range(&sheet_settings.data_range())?;
        state.sheet().write_rows(&sheet_settings.data_start(), &rows)?;
        let document = exporter.export()?;
        state.sheet().clear_range(&sheet_settings.data_range())?;
        document
    };

    let filename = download_filename(
        &state.config().settings().export.file_stem,
        request.from_date,
        request.to_date,
        exporter.extension(),
    );
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
        .map_err(|err| EngineError::ExportFailed {
            message: err.to_string(),
        })?;
    debug!(rows = rows.len(), bytes = document.len(), %filename, "Exported payroll document");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(exporter.content_type())),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    )
        .into_response())
}

/// Persists the posted rows as a new payroll run.
fn save(state: &AppState, body: Value) -> HandlerResult {
    let request: SaveRequest = decode(body)?;
    let payroll_name = request
        .payroll_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| invalid("payroll_name", "payroll_name required"))?;
    let lines: Vec<PayrollLine> = request
        .rows
        .ok_or_else(|| invalid("rows", "rows array required"))?
        .into_iter()
        .flatten()
        .collect();
    if lines.is_empty() {
        return Err(invalid("rows", "rows array required").into());
    }

    let run = PayrollRun::new(payroll_name, request.from_date, request.to_date);
    let line_count = lines.len();
    let payroll_run_id = state.store().insert_run(run, lines)?;

    info!(payroll_run_id = %payroll_run_id, items = line_count, "Payroll run saved");
    Ok(json_response(StatusCode::OK, SaveResponse { payroll_run_id }))
}
