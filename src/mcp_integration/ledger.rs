//! Request ledger for MCP transform calls.
//!
//! Every `transform` invocation is recorded so an agent can look a request up
//! later by id. [`InMemoryLedger`] keeps at most `capacity` entries and evicts
//! the oldest first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerStatus {
    Processing,
    Completed,
    Failed,
}

/// One recorded MCP call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub request_id: String,
    pub tool: String,
    pub method: Option<String>,
    pub entity_type: Option<String>,
    pub status: LedgerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// New entry in the `processing` state.
    pub fn processing(
        request_id: impl Into<String>,
        tool: impl Into<String>,
        method: Option<String>,
        entity_type: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            request_id: request_id.into(),
            tool: tool.into(),
            method,
            entity_type,
            status: LedgerStatus::Processing,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Storage for MCP request records.
#[async_trait]
pub trait RequestLedger: Send + Sync {
    /// Insert or replace an entry.
    async fn record(&self, entry: LedgerEntry);

    /// Set the final status of an entry. Returns false for an unknown id.
    async fn finish(&self, request_id: &str, status: LedgerStatus, error: Option<String>) -> bool;

    async fn get(&self, request_id: &str) -> Option<LedgerEntry>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[derive(Default)]
struct LedgerState {
    entries: HashMap<String, LedgerEntry>,
    order: VecDeque<String>,
}

/// Capacity-bounded in-memory ledger.
pub struct InMemoryLedger {
    capacity: usize,
    state: RwLock<LedgerState>,
}

impl InMemoryLedger {
    /// Create a ledger holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: RwLock::new(LedgerState::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.entries.clear();
        state.order.clear();
    }
}

#[async_trait]
impl RequestLedger for InMemoryLedger {
    async fn record(&self, entry: LedgerEntry) {
        let mut state = self.state.write().await;

        if state.entries.contains_key(&entry.request_id) {
            state.order.retain(|id| id != &entry.request_id);
        }
        state.order.push_back(entry.request_id.clone());
        state.entries.insert(entry.request_id.clone(), entry);

        while state.order.len() > self.capacity {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
                debug!("Evicted ledger entry (request: '{}')", oldest);
            }
        }
    }

    async fn finish(&self, request_id: &str, status: LedgerStatus, error: Option<String>) -> bool {
        let mut state = self.state.write().await;
        match state.entries.get_mut(request_id) {
            Some(entry) => {
                entry.status = status;
                entry.error = error;
                entry.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    async fn get(&self, request_id: &str) -> Option<LedgerEntry> {
        self.state.read().await.entries.get(request_id).cloned()
    }

    async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }
}
