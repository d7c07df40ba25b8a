//! ProcessTurn command handler.
//!
//! Wraps the pure dialogue engine with conversation lookup and persistence:
//! loads the snapshot, records the user's message, applies the engine's
//! patch, and records the assistant's reply. This wrapper is where a missing
//! conversation surfaces as an error; the engine itself is total.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::foundation::{ConversationId, DomainError};
use crate::domain::planning::{
    DialogueEngine, MessageKind, StoredMessage, Turn, TurnKind,
};
use crate::ports::ConversationStore;

/// Command to process one user turn in a conversation.
#[derive(Debug, Clone)]
pub struct ProcessTurnCommand {
    pub conversation_id: ConversationId,
    pub content: String,
    pub kind: TurnKind,
}

impl ProcessTurnCommand {
    /// Creates a free-text turn command.
    pub fn text(conversation_id: ConversationId, content: impl Into<String>) -> Self {
        Self {
            conversation_id,
            content: content.into(),
            kind: TurnKind::Text,
        }
    }

    /// Creates a quick-reply turn command.
    pub fn quick_reply(conversation_id: ConversationId, content: impl Into<String>) -> Self {
        Self {
            conversation_id,
            content: content.into(),
            kind: TurnKind::QuickReply,
        }
    }
}

/// Errors that can occur while processing a turn.
#[derive(Debug, Clone, Error)]
pub enum ProcessTurnError {
    #[error("Conversation not found: {0}")]
    ConversationNotFound(ConversationId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ProcessTurnError {
    fn from_domain(err: DomainError, id: ConversationId) -> Self {
        if err.is_not_found() {
            ProcessTurnError::ConversationNotFound(id)
        } else {
            ProcessTurnError::Storage(err.to_string())
        }
    }
}

/// Result of processing a turn: the stored assistant message plus the
/// caller-facing hints from the engine.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub message: StoredMessage,
    pub next_prompt: Option<String>,
    pub auto_continue: bool,
}

/// Handler that drives the dialogue engine against stored conversations.
pub struct ProcessTurnHandler<S: ConversationStore> {
    store: Arc<S>,
    engine: DialogueEngine,
}

impl<S: ConversationStore> ProcessTurnHandler<S> {
    /// Creates a new handler over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            engine: DialogueEngine::new(),
        }
    }

    /// Processes one user turn end to end.
    pub async fn handle(&self, cmd: ProcessTurnCommand) -> Result<TurnOutcome, ProcessTurnError> {
        let id = cmd.conversation_id;

        let snapshot = self
            .store
            .find_snapshot(&id)
            .await
            .map_err(|e| ProcessTurnError::from_domain(e, id))?
            .ok_or(ProcessTurnError::ConversationNotFound(id))?;

        let user_kind = match cmd.kind {
            TurnKind::Text => MessageKind::Text,
            TurnKind::QuickReply => MessageKind::QuickReply,
        };
        let user_message = StoredMessage::user(id, &cmd.content, user_kind);
        self.store
            .add_message(&id, &user_message)
            .await
            .map_err(|e| ProcessTurnError::from_domain(e, id))?;

        let turn = Turn {
            content: cmd.content,
            kind: cmd.kind,
        };
        let reply = self.engine.apply_turn(&snapshot, &turn);
        debug!(conversation_id = %id, kind = ?reply.kind, "engine reply computed");

        if !reply.patch.is_empty() {
            self.store
                .apply_patch(&id, &reply.patch)
                .await
                .map_err(|e| ProcessTurnError::from_domain(e, id))?;
        }

        let assistant_message =
            StoredMessage::assistant(id, &reply.text, reply.kind, reply.metadata);
        self.store
            .add_message(&id, &assistant_message)
            .await
            .map_err(|e| ProcessTurnError::from_domain(e, id))?;

        info!(
            conversation_id = %id,
            completed = reply.patch.status.is_some(),
            "turn processed"
        );

        Ok(TurnOutcome {
            message: assistant_message,
            next_prompt: reply.next_prompt,
            auto_continue: reply.auto_continue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryConversationStore;
    use crate::domain::planning::{
        ConversationSnapshot, ConversationStatus, MessageRole, PartyType,
    };

    fn handler_with_store() -> (ProcessTurnHandler<InMemoryConversationStore>, Arc<InMemoryConversationStore>) {
        let store = Arc::new(InMemoryConversationStore::new());
        (ProcessTurnHandler::new(Arc::clone(&store)), store)
    }

    #[tokio::test]
    async fn unknown_conversation_is_reported_not_found() {
        let (handler, _store) = handler_with_store();
        let missing = ConversationId::new();
        let err = handler
            .handle(ProcessTurnCommand::text(missing, "Bachelor Party"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessTurnError::ConversationNotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn turn_persists_both_messages_and_the_patch() {
        let (handler, store) = handler_with_store();
        let id = ConversationId::new();
        store.insert(id, ConversationSnapshot::new()).await;

        let outcome = handler
            .handle(ProcessTurnCommand::quick_reply(id, "Bachelor Party"))
            .await
            .unwrap();

        assert_eq!(outcome.message.role, MessageRole::Assistant);
        assert!(!outcome.auto_continue);

        let snapshot = store.find_snapshot(&id).await.unwrap().unwrap();
        assert_eq!(snapshot.party_type, Some(PartyType::Bachelor));
        assert_eq!(snapshot.status, ConversationStatus::Active);

        let messages = store.messages(&id).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].kind, MessageKind::QuickReply);
        assert_eq!(messages[1].role, MessageRole::Assistant);
    }

    #[tokio::test]
    async fn rejected_answer_leaves_snapshot_unchanged() {
        let (handler, store) = handler_with_store();
        let id = ConversationId::new();
        store.insert(id, ConversationSnapshot::new()).await;

        handler
            .handle(ProcessTurnCommand::text(id, "no idea"))
            .await
            .unwrap();

        let snapshot = store.find_snapshot(&id).await.unwrap().unwrap();
        assert_eq!(snapshot, ConversationSnapshot::new());
    }
}
