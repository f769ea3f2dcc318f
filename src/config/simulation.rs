//! Simulation configuration
//!
//! Fixed constants the presentation layer supplies to the summary queries:
//! the persona's disposable income and the length of the installment plans.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::ValidationError;

/// Simulation constants for the decision exercise.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// The persona's disposable income at the start of the exercise.
    #[serde(default = "default_initial_balance")]
    pub initial_balance: Decimal,

    /// Number of weeks covered by the installment breakdown views.
    #[serde(default = "default_week_count")]
    pub week_count: usize,
}

impl SimulationConfig {
    /// Validate simulation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.initial_balance < Decimal::ZERO {
            return Err(ValidationError::NegativeInitialBalance);
        }
        if self.week_count == 0 || self.week_count > 52 {
            return Err(ValidationError::InvalidWeekCount);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_balance: default_initial_balance(),
            week_count: default_week_count(),
        }
    }
}

fn default_initial_balance() -> Decimal {
    Decimal::from(1000)
}

fn default_week_count() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_exercise_constants() {
        let config = SimulationConfig::default();
        assert_eq!(config.initial_balance, Decimal::from(1000));
        assert_eq!(config.week_count, 4);
    }

    #[test]
    fn rejects_negative_initial_balance() {
        let config = SimulationConfig {
            initial_balance: Decimal::from(-1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_week_count() {
        let config = SimulationConfig {
            week_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
