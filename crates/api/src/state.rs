use std::sync::Arc;

use platecheck_core::PlateMatcher;
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;
use crate::error::AppResult;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind an `Arc` and read-only.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Compiled plate rule table and sample catalogue.
    pub matcher: Arc<PlateMatcher>,
    /// Cancelled on shutdown so open event streams end and the server can drain.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Compile the California matcher and assemble the state around it.
    ///
    /// Fails with [`AppError::Core`](crate::error::AppError::Core) if the rule
    /// table does not compile.
    pub fn new(config: ServerConfig, shutdown: CancellationToken) -> AppResult<Self> {
        let matcher = PlateMatcher::california()?;
        tracing::info!(
            formats = matcher.format_count(),
            samples = matcher.samples().plates().len(),
            "Plate matcher ready"
        );

        Ok(Self {
            config: Arc::new(config),
            matcher: Arc::new(matcher),
            shutdown,
        })
    }
}
