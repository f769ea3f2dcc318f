//! Decision record.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Purchase;

/// An immutable record of one resolved scenario.
///
/// Created once per step and never mutated; stepping back removes the most
/// recent record instead of editing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub purchase: Purchase,
    pub bought: bool,
    pub used_bnpl: bool,
}

impl Decision {
    pub fn new(purchase: Purchase, bought: bool, used_bnpl: bool) -> Self {
        Self {
            purchase,
            bought,
            used_bnpl,
        }
    }

    /// True when the item was bought on an installment plan.
    pub fn financed(&self) -> bool {
        self.bought && self.used_bnpl
    }

    /// True when the item was bought outright from the balance.
    pub fn paid_outright(&self) -> bool {
        self.bought && !self.used_bnpl
    }
}
