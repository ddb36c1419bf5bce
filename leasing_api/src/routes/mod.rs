//! Route registration.

pub mod workflow;

use axum::Router;

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new().merge(workflow::router()).with_state(state)
}
