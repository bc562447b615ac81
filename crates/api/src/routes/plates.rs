//! Route definitions for plate validation.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::plates;
use crate::state::AppState;

/// Plate routes, mounted under `/api`.
///
/// ```text
/// GET    /formats        -> get_formats
/// POST   /validate       -> validate
/// POST   /bulk-validate  -> bulk_validate
/// GET    /random         -> random_plate
/// GET    /stream         -> stream_validations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/formats", get(plates::get_formats))
        .route("/validate", post(plates::validate))
        .route("/bulk-validate", post(plates::bulk_validate))
        .route("/random", get(plates::random_plate))
        .route("/stream", get(plates::stream_validations))
}
