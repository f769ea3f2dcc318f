//! Route configuration for flow endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    advance_flow, get_flow, get_flow_summary, record_decision, reset_flow, start_flow, step_back,
    AppState,
};

/// Creates the flow router with all endpoints.
///
/// Routes:
/// - `POST /api/flows` - Start a new flow session
/// - `GET /api/flows/:id` - Current state of a session
/// - `POST /api/flows/:id/decision` - Record a decision on the current scenario
/// - `POST /api/flows/:id/advance` - Continue past the intermediate summary
/// - `POST /api/flows/:id/back` - Step back one screen
/// - `POST /api/flows/:id/reset` - Restart the exercise
/// - `GET /api/flows/:id/summary` - Derived financial metrics
pub fn flow_router() -> Router<AppState> {
    Router::new()
        .route("/api/flows", post(start_flow))
        .route("/api/flows/:id", get(get_flow))
        .route("/api/flows/:id/decision", post(record_decision))
        .route("/api/flows/:id/advance", post(advance_flow))
        .route("/api/flows/:id/back", post(step_back))
        .route("/api/flows/:id/reset", post(reset_flow))
        .route("/api/flows/:id/summary", get(get_flow_summary))
}
