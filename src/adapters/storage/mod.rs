//! Storage adapters.

mod in_memory_flow_store;

pub use in_memory_flow_store::InMemoryFlowStore;
