//! Demo store inventory.
//!
//! A fixed list of 29 items served by a read-only endpoint. The list has no
//! relation to the decision flow; it exists as presentation demo data.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;

/// A demo store item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreItem {
    pub name: String,
    pub price: Decimal,
}

impl StoreItem {
    fn new(name: &str, price: u32) -> Self {
        Self {
            name: name.to_string(),
            price: Decimal::from(price),
        }
    }
}

static DEMO_ITEMS: Lazy<Vec<StoreItem>> = Lazy::new(|| {
    vec![
        StoreItem::new("Apple", 2),
        StoreItem::new("Banana", 1),
        StoreItem::new("Cherry", 3),
        StoreItem::new("Grapes", 4),
        StoreItem::new("Orange", 2),
        StoreItem::new("Pineapple", 5),
        StoreItem::new("Strawberry", 6),
        StoreItem::new("Watermelon", 8),
        StoreItem::new("Mango", 3),
        StoreItem::new("Blueberry", 7),
        StoreItem::new("Peach", 4),
        StoreItem::new("Plum", 3),
        StoreItem::new("Pomegranate", 5),
        StoreItem::new("Lemon", 2),
        StoreItem::new("Coconut", 6),
        StoreItem::new("Papaya", 4),
        StoreItem::new("Kiwi", 3),
        StoreItem::new("Pear", 2),
        StoreItem::new("Fig", 5),
        StoreItem::new("Raspberry", 6),
        StoreItem::new("Blackberry", 6),
        StoreItem::new("Apricot", 4),
        StoreItem::new("Cantaloupe", 7),
        StoreItem::new("Grapefruit", 3),
        StoreItem::new("Dragonfruit", 9),
        StoreItem::new("Lychee", 5),
        StoreItem::new("Persimmon", 4),
        StoreItem::new("Gooseberry", 6),
        StoreItem::new("Tangerine", 3),
    ]
});

/// Returns the fixed demo item list, always in the same order.
pub fn demo_items() -> &'static [StoreItem] {
    &DEMO_ITEMS
}
