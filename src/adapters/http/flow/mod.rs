//! HTTP surface for the decision flow.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DecisionResponse, ErrorResponse, FlowStateResponse, FlowSummaryResponse, PurchaseResponse,
    RecordDecisionRequest,
};
pub use handlers::AppState;
pub use routes::flow_router;
