//! HTTP handlers for flow endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers. The `no_bnpl` purchase constraint is enforced here rather than
//! in the aggregate, since it is a presentation policy.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::flow::{
    AdvanceFlowCommand, AdvanceFlowError, AdvanceFlowHandler, GetFlowError, GetFlowHandler,
    GetFlowQuery, GetFlowSummaryError, GetFlowSummaryHandler, GetFlowSummaryQuery,
    RecordDecisionCommand, RecordDecisionError, RecordDecisionHandler, ResetFlowCommand,
    ResetFlowError, ResetFlowHandler, StartFlowCommand, StartFlowError, StartFlowHandler,
    StepBackCommand, StepBackError, StepBackHandler,
};
use crate::config::SimulationConfig;
use crate::domain::foundation::{DomainError, ErrorCode, FlowId};
use crate::ports::{FlowEventPublisher, FlowRepository};

use super::dto::{ErrorResponse, FlowStateResponse, FlowSummaryResponse, RecordDecisionRequest};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AppState {
    pub flow_repository: Arc<dyn FlowRepository>,
    pub event_publisher: Arc<dyn FlowEventPublisher>,
    pub simulation: SimulationConfig,
}

impl AppState {
    pub fn new(
        flow_repository: Arc<dyn FlowRepository>,
        event_publisher: Arc<dyn FlowEventPublisher>,
        simulation: SimulationConfig,
    ) -> Self {
        Self {
            flow_repository,
            event_publisher,
            simulation,
        }
    }

    pub fn start_flow_handler(&self) -> StartFlowHandler {
        StartFlowHandler::new(self.flow_repository.clone(), self.event_publisher.clone())
    }

    pub fn record_decision_handler(&self) -> RecordDecisionHandler {
        RecordDecisionHandler::new(self.flow_repository.clone(), self.event_publisher.clone())
    }

    pub fn advance_flow_handler(&self) -> AdvanceFlowHandler {
        AdvanceFlowHandler::new(self.flow_repository.clone(), self.event_publisher.clone())
    }

    pub fn step_back_handler(&self) -> StepBackHandler {
        StepBackHandler::new(self.flow_repository.clone(), self.event_publisher.clone())
    }

    pub fn reset_flow_handler(&self) -> ResetFlowHandler {
        ResetFlowHandler::new(self.flow_repository.clone(), self.event_publisher.clone())
    }

    pub fn get_flow_handler(&self) -> GetFlowHandler {
        GetFlowHandler::new(self.flow_repository.clone())
    }

    pub fn get_flow_summary_handler(&self) -> GetFlowSummaryHandler {
        GetFlowSummaryHandler::new(self.flow_repository.clone(), self.simulation.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/flows - Start a new flow session
pub async fn start_flow(State(state): State<AppState>) -> Result<impl IntoResponse, FlowApiError> {
    let handler = state.start_flow_handler();
    let result = handler.handle(StartFlowCommand).await?;

    let response = FlowStateResponse::from(&result.flow);
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/flows/:id/decision - Record a decision on the current scenario
pub async fn record_decision(
    State(state): State<AppState>,
    Path(flow_id): Path<String>,
    Json(request): Json<RecordDecisionRequest>,
) -> Result<impl IntoResponse, FlowApiError> {
    let flow_id = parse_flow_id(&flow_id)?;

    // Installments are refused for purchases flagged as immediate-payment-only.
    if request.bought && request.used_bnpl {
        let flow = state
            .flow_repository
            .find_by_id(flow_id)
            .await
            .map_err(FlowApiError::from_domain)?
            .ok_or_else(|| FlowApiError::NotFound(format!("Flow not found: {}", flow_id)))?;
        if flow.current_purchase().no_bnpl {
            return Err(FlowApiError::BnplUnavailable(
                flow.current_purchase().name.clone(),
            ));
        }
    }

    let handler = state.record_decision_handler();
    let cmd = RecordDecisionCommand {
        flow_id,
        bought: request.bought,
        used_bnpl: request.used_bnpl,
    };
    let result = handler.handle(cmd).await?;

    Ok(Json(FlowStateResponse::from(&result.flow)))
}

/// POST /api/flows/:id/advance - Continue past the intermediate summary
pub async fn advance_flow(
    State(state): State<AppState>,
    Path(flow_id): Path<String>,
) -> Result<impl IntoResponse, FlowApiError> {
    let flow_id = parse_flow_id(&flow_id)?;

    let handler = state.advance_flow_handler();
    let result = handler.handle(AdvanceFlowCommand { flow_id }).await?;

    Ok(Json(FlowStateResponse::from(&result.flow)))
}

/// POST /api/flows/:id/back - Step back one screen
pub async fn step_back(
    State(state): State<AppState>,
    Path(flow_id): Path<String>,
) -> Result<impl IntoResponse, FlowApiError> {
    let flow_id = parse_flow_id(&flow_id)?;

    let handler = state.step_back_handler();
    let result = handler.handle(StepBackCommand { flow_id }).await?;

    Ok(Json(FlowStateResponse::from(&result.flow)))
}

/// POST /api/flows/:id/reset - Restart the exercise from the beginning
pub async fn reset_flow(
    State(state): State<AppState>,
    Path(flow_id): Path<String>,
) -> Result<impl IntoResponse, FlowApiError> {
    let flow_id = parse_flow_id(&flow_id)?;

    let handler = state.reset_flow_handler();
    let result = handler.handle(ResetFlowCommand { flow_id }).await?;

    Ok(Json(FlowStateResponse::from(&result.flow)))
}

// ════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/flows/:id - Current state of one flow session
pub async fn get_flow(
    State(state): State<AppState>,
    Path(flow_id): Path<String>,
) -> Result<impl IntoResponse, FlowApiError> {
    let flow_id = parse_flow_id(&flow_id)?;

    let handler = state.get_flow_handler();
    let result = handler.handle(GetFlowQuery { flow_id }).await?;

    Ok(Json(FlowStateResponse::from(&result.flow)))
}

/// GET /api/flows/:id/summary - Derived financial metrics
pub async fn get_flow_summary(
    State(state): State<AppState>,
    Path(flow_id): Path<String>,
) -> Result<impl IntoResponse, FlowApiError> {
    let flow_id = parse_flow_id(&flow_id)?;

    let handler = state.get_flow_summary_handler();
    let result = handler.handle(GetFlowSummaryQuery { flow_id }).await?;

    Ok(Json(FlowSummaryResponse::new(&result.flow, result.summary)))
}

fn parse_flow_id(raw: &str) -> Result<FlowId, FlowApiError> {
    raw.parse()
        .map_err(|_| FlowApiError::BadRequest("Invalid flow ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum FlowApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    BnplUnavailable(String),
    Internal(String),
}

impl FlowApiError {
    /// Precondition violations map to 409, everything else to 500.
    fn from_domain(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => FlowApiError::Conflict(err.message),
            _ => FlowApiError::Internal(err.message),
        }
    }
}

impl From<StartFlowError> for FlowApiError {
    fn from(err: StartFlowError) -> Self {
        match err {
            StartFlowError::Domain(e) => FlowApiError::from_domain(e),
        }
    }
}

impl From<RecordDecisionError> for FlowApiError {
    fn from(err: RecordDecisionError) -> Self {
        match err {
            RecordDecisionError::FlowNotFound(id) => {
                FlowApiError::NotFound(format!("Flow not found: {}", id))
            }
            RecordDecisionError::Domain(e) => FlowApiError::from_domain(e),
        }
    }
}

impl From<AdvanceFlowError> for FlowApiError {
    fn from(err: AdvanceFlowError) -> Self {
        match err {
            AdvanceFlowError::FlowNotFound(id) => {
                FlowApiError::NotFound(format!("Flow not found: {}", id))
            }
            AdvanceFlowError::Domain(e) => FlowApiError::from_domain(e),
        }
    }
}

impl From<StepBackError> for FlowApiError {
    fn from(err: StepBackError) -> Self {
        match err {
            StepBackError::FlowNotFound(id) => {
                FlowApiError::NotFound(format!("Flow not found: {}", id))
            }
            StepBackError::Domain(e) => FlowApiError::from_domain(e),
        }
    }
}

impl From<ResetFlowError> for FlowApiError {
    fn from(err: ResetFlowError) -> Self {
        match err {
            ResetFlowError::FlowNotFound(id) => {
                FlowApiError::NotFound(format!("Flow not found: {}", id))
            }
            ResetFlowError::Domain(e) => FlowApiError::from_domain(e),
        }
    }
}

impl From<GetFlowError> for FlowApiError {
    fn from(err: GetFlowError) -> Self {
        match err {
            GetFlowError::FlowNotFound(id) => {
                FlowApiError::NotFound(format!("Flow not found: {}", id))
            }
            GetFlowError::Domain(e) => FlowApiError::from_domain(e),
        }
    }
}

impl From<GetFlowSummaryError> for FlowApiError {
    fn from(err: GetFlowSummaryError) -> Self {
        match err {
            GetFlowSummaryError::FlowNotFound(id) => {
                FlowApiError::NotFound(format!("Flow not found: {}", id))
            }
            GetFlowSummaryError::Domain(e) => FlowApiError::from_domain(e),
        }
    }
}

impl IntoResponse for FlowApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            FlowApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            FlowApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            FlowApiError::Conflict(msg) => (StatusCode::CONFLICT, ErrorResponse::conflict(msg)),
            FlowApiError::BnplUnavailable(name) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    "BNPL_UNAVAILABLE",
                    format!("{} must be paid in full immediately", name),
                ),
            ),
            FlowApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
