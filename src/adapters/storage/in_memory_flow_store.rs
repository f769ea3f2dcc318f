//! In-Memory Flow Store
//!
//! Stores flow sessions in a process-local map. Sessions do not survive a
//! restart, which is the intended lifetime for the exercise.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::flow::DecisionFlow;
use crate::domain::foundation::{DomainError, ErrorCode, FlowId};
use crate::ports::FlowRepository;

/// In-memory storage for flow sessions.
#[derive(Debug, Clone)]
pub struct InMemoryFlowStore {
    flows: Arc<RwLock<HashMap<FlowId, DecisionFlow>>>,
}

impl InMemoryFlowStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            flows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.flows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.flows.read().await.is_empty()
    }

    /// Clear all stored sessions (useful for tests).
    pub async fn clear(&self) {
        self.flows.write().await.clear();
    }
}

impl Default for InMemoryFlowStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlowRepository for InMemoryFlowStore {
    async fn save(&self, flow: &DecisionFlow) -> Result<(), DomainError> {
        let mut flows = self.flows.write().await;
        flows.insert(flow.id(), flow.clone());
        Ok(())
    }

    async fn update(&self, flow: &DecisionFlow) -> Result<(), DomainError> {
        let mut flows = self.flows.write().await;
        if !flows.contains_key(&flow.id()) {
            return Err(DomainError::new(
                ErrorCode::FlowNotFound,
                format!("Flow not found: {}", flow.id()),
            ));
        }
        flows.insert(flow.id(), flow.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: FlowId) -> Result<Option<DecisionFlow>, DomainError> {
        let flows = self.flows.read().await;
        Ok(flows.get(&id).cloned())
    }

    async fn delete(&self, id: FlowId) -> Result<(), DomainError> {
        let mut flows = self.flows.write().await;
        flows.remove(&id);
        Ok(())
    }
}
