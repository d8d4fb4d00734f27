pub mod health;
pub mod ticket;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /tickets          list (GET), create (POST)
/// /tickets/{id}     update fields (PATCH), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/tickets", ticket::router())
}
