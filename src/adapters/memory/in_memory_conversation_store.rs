//! In-Memory Conversation Store Adapter
//!
//! Stores conversation snapshots and message logs in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ConversationId, DomainError};
use crate::domain::planning::{ConversationSnapshot, SnapshotPatch, StoredMessage};
use crate::ports::ConversationStore;

/// In-memory storage for conversations
#[derive(Debug, Clone)]
pub struct InMemoryConversationStore {
    snapshots: Arc<RwLock<HashMap<ConversationId, ConversationSnapshot>>>,
    messages: Arc<RwLock<HashMap<ConversationId, Vec<StoredMessage>>>>,
}

impl InMemoryConversationStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(RwLock::new(HashMap::new())),
            messages: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a conversation with the given snapshot
    pub async fn insert(&self, id: ConversationId, snapshot: ConversationSnapshot) {
        self.snapshots.write().await.insert(id, snapshot);
        self.messages.write().await.entry(id).or_default();
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.snapshots.write().await.clear();
        self.messages.write().await.clear();
    }

    /// Get the number of stored conversations
    pub async fn conversation_count(&self) -> usize {
        self.snapshots.read().await.len()
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn find_snapshot(
        &self,
        id: &ConversationId,
    ) -> Result<Option<ConversationSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots.get(id).cloned())
    }

    async fn apply_patch(
        &self,
        id: &ConversationId,
        patch: &SnapshotPatch,
    ) -> Result<(), DomainError> {
        let mut snapshots = self.snapshots.write().await;
        let snapshot = snapshots
            .get_mut(id)
            .ok_or_else(|| DomainError::conversation_not_found(*id))?;
        patch.apply(snapshot);
        Ok(())
    }

    async fn add_message(
        &self,
        id: &ConversationId,
        message: &StoredMessage,
    ) -> Result<(), DomainError> {
        let snapshots = self.snapshots.read().await;
        if !snapshots.contains_key(id) {
            return Err(DomainError::conversation_not_found(*id));
        }
        drop(snapshots);

        let mut messages = self.messages.write().await;
        messages.entry(*id).or_default().push(message.clone());
        Ok(())
    }

    async fn messages(&self, id: &ConversationId) -> Result<Vec<StoredMessage>, DomainError> {
        let snapshots = self.snapshots.read().await;
        if !snapshots.contains_key(id) {
            return Err(DomainError::conversation_not_found(*id));
        }
        let messages = self.messages.read().await;
        Ok(messages.get(id).cloned().unwrap_or_default())
    }
}
