pub mod health;
pub mod plates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                 service health (GET)
/// /formats                supported plate formats (GET)
/// /validate               validate one plate (POST)
/// /bulk-validate          validate many plates (POST)
/// /random                 validation of a random sample plate (GET)
/// /stream                 server-sent random validations (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(plates::router())
}
