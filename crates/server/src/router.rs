use axum::routing::any;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Single root route. The relay answers every method the same way.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::relay_feed))
        .with_state(state)
}
