//! The decision flow aggregate and its derived summaries.

mod aggregate;
mod decision;
mod events;
mod summary;
mod view_mode;

pub use aggregate::{DecisionFlow, HAPPINESS_PER_PURCHASE};
pub use decision::Decision;
pub use events::FlowEvent;
pub use summary::{
    remaining_balance, total_bnpl_debt, weekly_balance, weekly_breakdown, weekly_debt,
    FlowSummary,
};
pub use view_mode::ViewMode;
