//! Static catalogs backing the exercise.
//!
//! The purchase catalog drives the decision flow; the demo store items back
//! an unrelated read-only endpoint and are never consumed by the flow.

mod purchase;
mod store_items;

pub use purchase::{Purchase, PurchaseCatalog};
pub use store_items::{demo_items, StoreItem};
