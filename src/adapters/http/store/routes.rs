//! Route configuration for the demo store endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::list_items;

/// Creates the store router.
///
/// Routes:
/// - `GET /api/store/items` - fixed demo item list
pub fn store_router() -> Router {
    Router::new().route("/api/store/items", get(list_items))
}
