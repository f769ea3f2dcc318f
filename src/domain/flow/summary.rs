//! Pure summary reducers over a decision history.
//!
//! Every function here is total over any decision sequence, including the
//! empty one, and never mutates its input.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{Decision, DecisionFlow};

/// Sum of all outstanding installment plan totals (`weekly * weeks`) across
/// financed purchases.
pub fn total_bnpl_debt(decisions: &[Decision]) -> Decimal {
    decisions
        .iter()
        .filter(|d| d.financed())
        .map(|d| d.purchase.plan_total())
        .sum()
}

/// Sum of the weekly payment amounts across financed purchases.
pub fn weekly_debt(decisions: &[Decision]) -> Decimal {
    decisions
        .iter()
        .filter(|d| d.financed())
        .map(|d| d.purchase.weekly)
        .sum()
}

/// Balance left after paying every outright purchase in full.
///
/// Financed purchases do not touch the balance here: they are modeled as
/// future-financed, not paid from the balance at summary time.
pub fn remaining_balance(decisions: &[Decision], initial_balance: Decimal) -> Decimal {
    decisions
        .iter()
        .filter(|d| d.paid_outright())
        .fold(initial_balance, |balance, d| balance - d.purchase.full_price)
}

/// Installment payment due in each of the next `week_count` weeks.
///
/// A financed purchase contributes its weekly amount to every week index
/// below its plan length. Purchases flagged `no_bnpl` are excluded even if a
/// decision claims they were financed.
pub fn weekly_breakdown(decisions: &[Decision], week_count: usize) -> Vec<Decimal> {
    (0..week_count)
        .map(|week| {
            decisions
                .iter()
                .filter(|d| d.financed() && !d.purchase.no_bnpl && week < d.purchase.weeks)
                .map(|d| d.purchase.weekly)
                .sum()
        })
        .collect()
}

/// Running balance at the end of each week.
///
/// Starts from the balance after all outright purchases, then subtracts each
/// week's installment total.
pub fn weekly_balance(
    decisions: &[Decision],
    initial_balance: Decimal,
    week_count: usize,
) -> Vec<Decimal> {
    let mut balance = remaining_balance(decisions, initial_balance);
    weekly_breakdown(decisions, week_count)
        .into_iter()
        .map(|payment| {
            balance -= payment;
            balance
        })
        .collect()
}

/// All derived metrics for one flow session, bundled for the summary query.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSummary {
    pub initial_balance: Decimal,
    pub remaining_balance: Decimal,
    pub weekly_debt: Decimal,
    pub total_bnpl_debt: Decimal,
    pub happiness_score: u32,
    pub weekly_breakdown: Vec<Decimal>,
    pub weekly_balance: Vec<Decimal>,
}

impl FlowSummary {
    /// Derives every metric from the flow's decision history.
    pub fn derive(flow: &DecisionFlow, initial_balance: Decimal, week_count: usize) -> Self {
        let decisions = flow.decisions();
        Self {
            initial_balance,
            remaining_balance: remaining_balance(decisions, initial_balance),
            weekly_debt: weekly_debt(decisions),
            total_bnpl_debt: total_bnpl_debt(decisions),
            happiness_score: flow.happiness_score(),
            weekly_breakdown: weekly_breakdown(decisions, week_count),
            weekly_balance: weekly_balance(decisions, initial_balance, week_count),
        }
    }
}
