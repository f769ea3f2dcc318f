//! Ports: interfaces the application layer depends on.
//!
//! Adapters implement these traits; handlers receive them as trait objects.

mod event_publisher;
mod flow_repository;

pub use event_publisher::FlowEventPublisher;
pub use flow_repository::FlowRepository;
