//! Handlers for plate validation.
//!
//! Each handler is a thin pass-through to [`PlateMatcher`]; the only checks
//! made here are on the request shape.
//!
//! [`PlateMatcher`]: platecheck_core::PlateMatcher

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use futures::stream::{self, Stream, StreamExt};
use indexmap::IndexMap;
use platecheck_core::{BulkValidation, ValidationResult};
use serde::{Deserialize, Serialize};
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ── Formats ──────────────────────────────────────────────────────────

/// Response body for the formats endpoint.
#[derive(Debug, Serialize)]
pub struct FormatsResponse {
    /// Era label to pattern texts, in priority order.
    pub formats: IndexMap<&'static str, Vec<&'static str>>,
    pub total_formats: usize,
}

/// GET /api/formats
pub async fn get_formats(State(state): State<AppState>) -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: state.matcher.formats().collect(),
        total_formats: state.matcher.format_count(),
    })
}

// ── Single / bulk validation ─────────────────────────────────────────

/// Request body for the single-plate endpoint.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub plate: Option<String>,
}

/// POST /api/validate
///
/// Returns 400 when the body is unreadable or `plate` is missing or null.
/// An empty `plate` is validated (and reported invalid) like any other.
pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> AppResult<Json<ValidationResult>> {
    let plate = required_field(payload, |body| body.plate, "Plate number is required")?;

    let info = state.matcher.plate_info(&plate);
    tracing::debug!(
        plate = %info.plate,
        is_valid = info.is_valid,
        format_type = info.format_type,
        "Validated plate"
    );

    Ok(Json(info))
}

/// Request body for the bulk endpoint. Null entries are allowed and skipped.
#[derive(Debug, Deserialize)]
pub struct BulkValidateRequest {
    pub plates: Option<Vec<Option<String>>>,
}

/// POST /api/bulk-validate
///
/// Null and empty entries are skipped without producing a result.
pub async fn bulk_validate(
    State(state): State<AppState>,
    payload: Result<Json<BulkValidateRequest>, JsonRejection>,
) -> AppResult<Json<BulkValidation>> {
    let plates = required_field(payload, |body| body.plates, "Plates array is required")?;

    let submitted = plates.len();
    let bulk = state.matcher.bulk_validate(plates);
    tracing::debug!(
        submitted,
        count = bulk.count,
        valid_count = bulk.valid_count,
        "Bulk validated plates"
    );

    Ok(Json(bulk))
}

/// Pull a required field out of a JSON body, rejecting the request if the
/// body could not be read or the field is absent.
fn required_field<B, T>(
    payload: Result<Json<B>, JsonRejection>,
    field: impl FnOnce(B) -> Option<T>,
    message: &str,
) -> AppResult<T> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            return Err(AppError::BadRequest(message.to_string()));
        }
    };
    field(body).ok_or_else(|| AppError::BadRequest(message.to_string()))
}

// ── Random ───────────────────────────────────────────────────────────

/// GET /api/random
///
/// Picks a sample plate and returns its full validation record.
pub async fn random_plate(State(state): State<AppState>) -> Json<ValidationResult> {
    let plate = state.matcher.generate_random_plate();
    Json(state.matcher.plate_info(plate))
}

/// GET /api/stream
///
/// Server-sent events, one validation of a random sample plate per
/// `stream_interval`. The stream ends when the client disconnects or the
/// server shuts down.
pub async fn stream_validations(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    tracing::info!(interval = ?state.config.stream_interval, "Random validation stream opened");

    let mut ticker = tokio::time::interval(state.config.stream_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let validations = Arc::clone(&state.matcher).random_validations();
    let events = IntervalStream::new(ticker)
        .zip(stream::iter(validations))
        .map(|(_, info)| Event::default().json_data(info))
        .take_until(state.shutdown.clone().cancelled_owned());

    Sse::new(events).keep_alive(KeepAlive::default())
}
