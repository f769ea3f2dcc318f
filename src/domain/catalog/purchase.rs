//! The fixed purchase scenarios the persona walks through.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchase scenario: pricing options plus the narration shown to the user.
///
/// Immutable and defined at process start. When `no_bnpl` is set the item has
/// no installment option and must be paid full price immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub name: String,
    pub description: String,
    pub image: String,
    pub full_price: Decimal,
    pub bnpl_price: Decimal,
    pub weekly: Decimal,
    pub weeks: usize,
    #[serde(default)]
    pub no_bnpl: bool,
}

impl Purchase {
    /// Total cost of the installment plan.
    pub fn plan_total(&self) -> Decimal {
        self.weekly * Decimal::from(self.weeks as u64)
    }
}

/// The ordered, fixed list of purchase scenarios.
#[derive(Debug)]
pub struct PurchaseCatalog {
    purchases: Vec<Purchase>,
}

static STANDARD_CATALOG: Lazy<PurchaseCatalog> = Lazy::new(|| PurchaseCatalog {
    purchases: vec![
        Purchase {
            name: "Shoes".to_string(),
            description: "At the night when Ashley received her first pay, she scrolls \
                          through instagram and sees an ad: Must-have sneakers for only \
                          $200! BNPL available: Just $50 x 4 payments."
                .to_string(),
            image: "/images/shoes.png".to_string(),
            full_price: Decimal::from(200),
            bnpl_price: Decimal::from(200),
            weekly: Decimal::from(50),
            weeks: 4,
            no_bnpl: false,
        },
        Purchase {
            name: "iPhone".to_string(),
            description: "Ashley was thinking of getting the new iPhone to replace her \
                          3-year-old phone."
                .to_string(),
            image: "/images/iphone.png".to_string(),
            full_price: Decimal::from(1000),
            bnpl_price: Decimal::from(1000),
            weekly: Decimal::from(250),
            weeks: 4,
            no_bnpl: false,
        },
        Purchase {
            name: "PS5".to_string(),
            description: "Ashley used BNPL for her sneakers and got a reward: more app \
                          promos! At the same time, all her friends were flexing their \
                          new PS5s and asking her to get one too so they could play \
                          together."
                .to_string(),
            image: "/images/ps5.png".to_string(),
            full_price: Decimal::from(500),
            bnpl_price: Decimal::from(500),
            weekly: Decimal::from(125),
            weeks: 4,
            no_bnpl: false,
        },
        Purchase {
            name: "Unexpected Expenses".to_string(),
            description: "Life happens! Ashley's iPhone screen cracked and needs repair \
                          ($300). She also realized she forgot to pay her utility bill \
                          last month ($100). These unexpected expenses need to be \
                          handled immediately."
                .to_string(),
            image: "/images/crack.jpg".to_string(),
            full_price: Decimal::from(400),
            bnpl_price: Decimal::from(400),
            weekly: Decimal::from(100),
            weeks: 4,
            no_bnpl: true,
        },
    ],
});

impl PurchaseCatalog {
    /// Returns the standard four-scenario catalog.
    pub fn standard() -> &'static PurchaseCatalog {
        &STANDARD_CATALOG
    }

    /// Number of scenarios in the catalog.
    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }

    /// Returns the purchase at the given step index.
    pub fn get(&self, index: usize) -> Option<&Purchase> {
        self.purchases.get(index)
    }

    /// All purchases in step order.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    /// Index of the final step.
    pub fn last_index(&self) -> usize {
        self.purchases.len() - 1
    }

    /// Returns true if the given index is the final step.
    pub fn is_last(&self, index: usize) -> bool {
        index == self.last_index()
    }
}
