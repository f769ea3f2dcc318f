//! HTTP DTOs for flow endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Purchase;
use crate::domain::flow::{Decision, DecisionFlow, FlowSummary, ViewMode};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to record a decision on the current scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDecisionRequest {
    pub bought: bool,
    #[serde(default)]
    pub used_bnpl: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A purchase scenario as presented to the client.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseResponse {
    pub name: String,
    pub description: String,
    pub image: String,
    pub full_price: Decimal,
    pub bnpl_price: Decimal,
    pub weekly: Decimal,
    pub weeks: usize,
    pub no_bnpl: bool,
}

impl From<&Purchase> for PurchaseResponse {
    fn from(purchase: &Purchase) -> Self {
        Self {
            name: purchase.name.clone(),
            description: purchase.description.clone(),
            image: purchase.image.clone(),
            full_price: purchase.full_price,
            bnpl_price: purchase.bnpl_price,
            weekly: purchase.weekly,
            weeks: purchase.weeks,
            no_bnpl: purchase.no_bnpl,
        }
    }
}

/// One resolved scenario in the history list.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionResponse {
    pub purchase_name: String,
    pub bought: bool,
    pub used_bnpl: bool,
    pub full_price: Decimal,
    pub weekly: Decimal,
}

impl From<&Decision> for DecisionResponse {
    fn from(decision: &Decision) -> Self {
        Self {
            purchase_name: decision.purchase.name.clone(),
            bought: decision.bought,
            used_bnpl: decision.used_bnpl,
            full_price: decision.purchase.full_price,
            weekly: decision.purchase.weekly,
        }
    }
}

/// Full view of one flow session.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStateResponse {
    pub flow_id: String,
    pub view_mode: ViewMode,
    pub current_step: usize,
    pub step_count: usize,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub happiness_score: u32,
    pub current_purchase: PurchaseResponse,
    pub decisions: Vec<DecisionResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&DecisionFlow> for FlowStateResponse {
    fn from(flow: &DecisionFlow) -> Self {
        Self {
            flow_id: flow.id().to_string(),
            view_mode: flow.view_mode(),
            current_step: flow.current_step(),
            step_count: flow.step_count(),
            is_first_step: flow.is_first_step(),
            is_last_step: flow.is_last_step(),
            happiness_score: flow.happiness_score(),
            current_purchase: flow.current_purchase().into(),
            decisions: flow.decisions().iter().map(Into::into).collect(),
            created_at: flow.created_at().as_datetime().to_rfc3339(),
            updated_at: flow.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Derived financial metrics for one flow session.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSummaryResponse {
    pub flow_id: String,
    pub initial_balance: Decimal,
    pub remaining_balance: Decimal,
    pub weekly_debt: Decimal,
    pub total_bnpl_debt: Decimal,
    pub happiness_score: u32,
    pub weekly_breakdown: Vec<Decimal>,
    pub weekly_balance: Vec<Decimal>,
    pub decisions: Vec<DecisionResponse>,
}

impl FlowSummaryResponse {
    pub fn new(flow: &DecisionFlow, summary: FlowSummary) -> Self {
        Self {
            flow_id: flow.id().to_string(),
            initial_balance: summary.initial_balance,
            remaining_balance: summary.remaining_balance,
            weekly_debt: summary.weekly_debt,
            total_bnpl_debt: summary.total_bnpl_debt,
            happiness_score: summary.happiness_score,
            weekly_breakdown: summary.weekly_breakdown,
            weekly_balance: summary.weekly_balance,
            decisions: flow.decisions().iter().map(Into::into).collect(),
        }
    }
}

/// Error payload shared by all flow endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
