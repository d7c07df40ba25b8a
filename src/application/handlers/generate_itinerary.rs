//! GenerateItinerary command handler.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{ConversationId, DomainError};
use crate::domain::planning::{synthesize_itinerary, MessageKind, StoredMessage};
use crate::ports::ConversationStore;

/// Command to generate an itinerary for a conversation.
#[derive(Debug, Clone)]
pub struct GenerateItineraryCommand {
    pub conversation_id: ConversationId,
}

/// Errors that can occur while generating an itinerary.
#[derive(Debug, Clone, Error)]
pub enum GenerateItineraryError {
    #[error("Conversation not found: {0}")]
    ConversationNotFound(ConversationId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl GenerateItineraryError {
    fn from_domain(err: DomainError, id: ConversationId) -> Self {
        if err.is_not_found() {
            GenerateItineraryError::ConversationNotFound(id)
        } else {
            GenerateItineraryError::Storage(err.to_string())
        }
    }
}

/// Handler that synthesizes an itinerary from the collected slots and
/// records it as an assistant message. Missing slots fall back to catalog
/// defaults, so this works mid-conversation too.
pub struct GenerateItineraryHandler<S: ConversationStore> {
    store: Arc<S>,
}

impl<S: ConversationStore> GenerateItineraryHandler<S> {
    /// Creates a new handler over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Generates and persists the itinerary message.
    pub async fn handle(
        &self,
        cmd: GenerateItineraryCommand,
    ) -> Result<StoredMessage, GenerateItineraryError> {
        let id = cmd.conversation_id;

        let snapshot = self
            .store
            .find_snapshot(&id)
            .await
            .map_err(|e| GenerateItineraryError::from_domain(e, id))?
            .ok_or(GenerateItineraryError::ConversationNotFound(id))?;

        let response = synthesize_itinerary(&snapshot);
        let message = StoredMessage::assistant(
            id,
            response.text,
            MessageKind::Itinerary,
            Some(response.metadata),
        );
        self.store
            .add_message(&id, &message)
            .await
            .map_err(|e| GenerateItineraryError::from_domain(e, id))?;

        info!(conversation_id = %id, "itinerary generated");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryConversationStore;
    use crate::domain::planning::{ActivityPreference, City, ConversationSnapshot};

    #[tokio::test]
    async fn unknown_conversation_is_reported_not_found() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = GenerateItineraryHandler::new(Arc::clone(&store));
        let missing = ConversationId::new();
        let err = handler
            .handle(GenerateItineraryCommand {
                conversation_id: missing,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateItineraryError::ConversationNotFound(id) if id == missing
        ));
    }

    #[tokio::test]
    async fn itinerary_message_is_persisted_with_rich_media() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = GenerateItineraryHandler::new(Arc::clone(&store));
        let id = ConversationId::new();
        let mut snapshot = ConversationSnapshot::new();
        snapshot.city = Some(City::Phuket);
        snapshot.activity_preference = Some(ActivityPreference::Activities);
        store.insert(id, snapshot).await;

        let message = handler
            .handle(GenerateItineraryCommand {
                conversation_id: id,
            })
            .await
            .unwrap();

        assert_eq!(message.kind, MessageKind::Itinerary);
        let metadata = message.metadata.as_ref().unwrap();
        let media = metadata.rich_media.as_ref().unwrap();
        assert!(media.itinerary.is_some());
        assert!(media.activities.as_ref().is_some_and(|a| !a.is_empty()));

        let stored = store.messages(&id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, message.id);
    }

    #[tokio::test]
    async fn empty_snapshot_still_yields_an_itinerary() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = GenerateItineraryHandler::new(Arc::clone(&store));
        let id = ConversationId::new();
        store.insert(id, ConversationSnapshot::new()).await;

        let message = handler
            .handle(GenerateItineraryCommand {
                conversation_id: id,
            })
            .await
            .unwrap();
        assert!(message.content.contains("Bangkok"));
    }
}
