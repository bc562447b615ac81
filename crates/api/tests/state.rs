//! Tests for application state assembly.

mod common;

use tokio_util::sync::CancellationToken;

use platecheck_api::state::AppState;

#[test]
fn state_compiles_california_matcher() {
    let shutdown = CancellationToken::new();
    let state = AppState::new(common::test_config(), shutdown.clone())
        .expect("California rule table should compile");

    assert_eq!(state.matcher.format_count(), 11);
    assert!(!state.matcher.samples().plates().is_empty());
    assert_eq!(state.config.port, 0);

    shutdown.cancel();
    assert!(state.shutdown.is_cancelled());
}
