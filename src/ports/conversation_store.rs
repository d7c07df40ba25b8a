//! Conversation store port.
//!
//! Persistence is an external collaborator; the engine only ever sees a
//! snapshot and hands back a patch. Implementations own ids, ordering, and
//! durability.

use async_trait::async_trait;

use crate::domain::foundation::{ConversationId, DomainError};
use crate::domain::planning::{ConversationSnapshot, SnapshotPatch, StoredMessage};

/// Port for conversation persistence.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Loads the current snapshot for a conversation.
    ///
    /// Returns `Ok(None)` when the conversation does not exist.
    async fn find_snapshot(
        &self,
        id: &ConversationId,
    ) -> Result<Option<ConversationSnapshot>, DomainError>;

    /// Applies a patch to a conversation, last write wins.
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if the conversation doesn't exist
    /// - `StorageError` on persistence failure
    async fn apply_patch(
        &self,
        id: &ConversationId,
        patch: &SnapshotPatch,
    ) -> Result<(), DomainError>;

    /// Appends a message to a conversation, in arrival order.
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if the conversation doesn't exist
    /// - `StorageError` on persistence failure
    async fn add_message(
        &self,
        id: &ConversationId,
        message: &StoredMessage,
    ) -> Result<(), DomainError>;

    /// Returns all messages of a conversation in insertion order.
    async fn messages(&self, id: &ConversationId) -> Result<Vec<StoredMessage>, DomainError>;
}
