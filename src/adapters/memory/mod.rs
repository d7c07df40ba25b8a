//! In-memory adapters for testing and development.

mod in_memory_conversation_store;

pub use in_memory_conversation_store::InMemoryConversationStore;
