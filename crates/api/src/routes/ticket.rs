//! Route definitions for the `/tickets` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::ticket;
use crate::state::AppState;

/// Routes mounted at `/tickets`.
///
/// ```text
/// GET    /       -> list   (?search, ?status, ?priority)
/// POST   /       -> create
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ticket::list).post(ticket::create))
        .route("/{id}", patch(ticket::update).delete(ticket::delete))
}
