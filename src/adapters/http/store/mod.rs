//! HTTP surface for the demo store.

mod handlers;
mod routes;

pub use handlers::list_items;
pub use routes::store_router;
