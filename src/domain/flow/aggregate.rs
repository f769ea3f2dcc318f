//! DecisionFlow aggregate - the root entity for one exercise session.
//!
//! A DecisionFlow walks the persona through the purchase catalog one step at
//! a time, collecting an append-only decision history and a derived
//! happiness score.

use crate::domain::catalog::{Purchase, PurchaseCatalog};
use crate::domain::foundation::{DomainError, ErrorCode, FlowId, StateMachine, Timestamp};

use super::{Decision, FlowEvent, ViewMode};

/// Happiness awarded per purchase, regardless of payment method.
pub const HAPPINESS_PER_PURCHASE: u32 = 20;

/// The DecisionFlow aggregate root.
///
/// Owns the decision history, the step pointer, and the view mode. The step
/// pointer and decision count move together: every transition that touches
/// one adjusts the other, so they are never mutated independently.
#[derive(Debug, Clone)]
pub struct DecisionFlow {
    id: FlowId,
    catalog: &'static PurchaseCatalog,
    decisions: Vec<Decision>,
    current_step: usize,
    happiness_score: u32,
    view_mode: ViewMode,
    created_at: Timestamp,
    updated_at: Timestamp,
    domain_events: Vec<FlowEvent>,
}

impl DecisionFlow {
    /// Creates a new flow over the standard purchase catalog.
    pub fn new() -> Self {
        Self::with_catalog(PurchaseCatalog::standard())
    }

    /// Creates a new flow over a specific catalog.
    pub fn with_catalog(catalog: &'static PurchaseCatalog) -> Self {
        let id = FlowId::new();
        let now = Timestamp::now();

        let mut flow = Self {
            id,
            catalog,
            decisions: Vec::new(),
            current_step: 0,
            happiness_score: 0,
            view_mode: ViewMode::Deciding,
            created_at: now,
            updated_at: now,
            domain_events: Vec::new(),
        };

        flow.record_event(FlowEvent::Created {
            flow_id: id,
            created_at: now,
        });

        flow
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the flow ID.
    pub fn id(&self) -> FlowId {
        self.id
    }

    /// Returns the current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Returns the current step index.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the happiness score.
    pub fn happiness_score(&self) -> u32 {
        self.happiness_score
    }

    /// Returns the decision history in step order.
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Returns the purchase at the current step.
    pub fn current_purchase(&self) -> &Purchase {
        // The step pointer never leaves catalog bounds.
        self.catalog
            .get(self.current_step)
            .expect("step pointer within catalog bounds")
    }

    /// Total number of steps in this flow.
    pub fn step_count(&self) -> usize {
        self.catalog.len()
    }

    /// Returns true when the current step is the first.
    pub fn is_first_step(&self) -> bool {
        self.current_step == 0
    }

    /// Returns true when the current step is the last.
    pub fn is_last_step(&self) -> bool {
        self.catalog.is_last(self.current_step)
    }

    /// Returns when this flow was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when this flow was last updated.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<FlowEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Transitions
    // ───────────────────────────────────────────────────────────────

    /// Records a decision for the current scenario.
    ///
    /// Valid only in `Deciding` mode. Appends a decision for the purchase at
    /// the current step, awards happiness when bought, and moves to the
    /// intermediate summary.
    ///
    /// `no_bnpl` is not enforced here: which payment options are offered for
    /// a forced purchase is presentation-layer policy, and the HTTP adapter
    /// rejects installment requests for those scenarios.
    pub fn record_decision(&mut self, bought: bool, used_bnpl: bool) -> Result<(), DomainError> {
        if self.view_mode != ViewMode::Deciding {
            return Err(DomainError::invalid_transition(format!(
                "Cannot record a decision while in {:?}",
                self.view_mode
            )));
        }

        let purchase = self
            .catalog
            .get(self.current_step)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::StepNotFound, "Step index outside the catalog")
            })?
            .clone();
        let purchase_name = purchase.name.clone();

        self.decisions.push(Decision::new(purchase, bought, used_bnpl));
        if bought {
            self.happiness_score += HAPPINESS_PER_PURCHASE;
        }
        self.view_mode = self.view_mode.transition_to(ViewMode::IntermediateSummary)?;
        self.touch();

        self.record_event(FlowEvent::DecisionRecorded {
            flow_id: self.id,
            step: self.current_step,
            purchase_name,
            bought,
            used_bnpl,
        });

        debug_assert!(self.invariants_hold());
        Ok(())
    }

    /// Advances past the intermediate summary.
    ///
    /// Valid only in `IntermediateSummary` mode. On the last step the flow
    /// moves to the final summary; otherwise the step pointer advances and
    /// the next scenario is presented.
    pub fn advance(&mut self) -> Result<(), DomainError> {
        if self.view_mode != ViewMode::IntermediateSummary {
            return Err(DomainError::invalid_transition(format!(
                "Cannot advance while in {:?}",
                self.view_mode
            )));
        }

        if self.is_last_step() {
            self.view_mode = self.view_mode.transition_to(ViewMode::FinalSummary)?;
        } else {
            self.current_step += 1;
            self.view_mode = self.view_mode.transition_to(ViewMode::Deciding)?;
        }
        self.touch();

        self.record_event(FlowEvent::Advanced {
            flow_id: self.id,
            step: self.current_step,
            view_mode: self.view_mode,
        });

        debug_assert!(self.invariants_hold());
        Ok(())
    }

    /// Reverses the most recent forward transition. Total: stepping back
    /// from the first `Deciding` screen is an explicit no-op.
    ///
    /// - `FinalSummary` returns to the intermediate summary without touching
    ///   the history.
    /// - `IntermediateSummary` removes the decision just recorded (and its
    ///   happiness contribution) and returns to `Deciding` at the same step.
    /// - `Deciding` at a later step moves the pointer back one step and
    ///   removes the previous step's decision.
    pub fn step_back(&mut self) {
        match self.view_mode {
            ViewMode::FinalSummary => {
                self.view_mode = ViewMode::IntermediateSummary;
            }
            ViewMode::IntermediateSummary => {
                self.remove_last_decision();
                self.view_mode = ViewMode::Deciding;
            }
            ViewMode::Deciding => {
                if self.is_first_step() {
                    return;
                }
                self.current_step -= 1;
                self.remove_last_decision();
            }
        }
        self.touch();

        self.record_event(FlowEvent::SteppedBack {
            flow_id: self.id,
            step: self.current_step,
            view_mode: self.view_mode,
        });

        debug_assert!(self.invariants_hold());
    }

    /// Restores the flow to its initial state. Always succeeds.
    pub fn reset(&mut self) {
        self.decisions.clear();
        self.current_step = 0;
        self.happiness_score = 0;
        self.view_mode = ViewMode::Deciding;
        self.touch();

        self.record_event(FlowEvent::Reset { flow_id: self.id });

        debug_assert!(self.invariants_hold());
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn remove_last_decision(&mut self) {
        if let Some(decision) = self.decisions.pop() {
            if decision.bought {
                self.happiness_score -= HAPPINESS_PER_PURCHASE;
            }
        }
    }

    fn record_event(&mut self, event: FlowEvent) {
        self.domain_events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    fn invariants_hold(&self) -> bool {
        let bought = self.decisions.iter().filter(|d| d.bought).count() as u32;
        if self.happiness_score != bought * HAPPINESS_PER_PURCHASE {
            return false;
        }
        let expected_len = match self.view_mode {
            ViewMode::Deciding => self.current_step,
            ViewMode::IntermediateSummary => self.current_step + 1,
            ViewMode::FinalSummary => self.catalog.len(),
        };
        self.decisions.len() == expected_len && self.current_step < self.catalog.len()
    }
}

impl Default for DecisionFlow {
    fn default() -> Self {
        Self::new()
    }
}
