//! HTTP handlers for the demo store endpoints.

use axum::extract::Json;

use crate::domain::catalog::{demo_items, StoreItem};

/// GET /api/store/items - the fixed demo item list.
///
/// Idempotent and side-effect free; always returns the same 29 records.
pub async fn list_items() -> Json<Vec<StoreItem>> {
    Json(demo_items().to_vec())
}
