//! Message shapes shared with storage and transport.
//!
//! Metadata is a typed structure rather than loose JSON; the serialized form
//! matches the wire shape the front-end renders (optional `quick_replies`,
//! optional `rich_media` with images, activity cards, and a day itinerary).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, MessageId, Timestamp};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// How a message should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    Text,
    QuickReply,
    RichMedia,
    Itinerary,
}

/// Structured payload attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MessageMetadata {
    /// Suggested replies, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<String>>,

    /// Rich content: images, activity cards, a day itinerary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_media: Option<RichMedia>,
}

impl MessageMetadata {
    /// Metadata carrying only quick replies.
    pub fn quick_replies(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            quick_replies: Some(labels.into_iter().map(Into::into).collect()),
            rich_media: None,
        }
    }

    /// Metadata carrying only rich media.
    pub fn rich_media(media: RichMedia) -> Self {
        Self {
            quick_replies: None,
            rich_media: Some(media),
        }
    }
}

/// Rich media payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RichMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<ActivityCard>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<DayItinerary>,
}

/// A highlighted activity card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,

    /// Per-guest cost in whole currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A day-structured schedule of time-stamped stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayItinerary {
    pub day: u32,
    pub activities: Vec<ItineraryStop>,
}

/// One stop in a day itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryStop {
    /// Start time, "HH:MM".
    pub time: String,
    pub activity: String,
    pub location: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// A persisted message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub role: MessageRole,
    pub content: String,
    pub kind: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
    pub created_at: Timestamp,
}

impl StoredMessage {
    /// Creates a user message.
    pub fn user(conversation_id: ConversationId, content: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            role: MessageRole::User,
            content: content.into(),
            kind,
            metadata: None,
            created_at: Timestamp::now(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(
        conversation_id: ConversationId,
        content: impl Into<String>,
        kind: MessageKind,
        metadata: Option<MessageMetadata>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            role: MessageRole::Assistant,
            content: content.into(),
            kind,
            metadata,
            created_at: Timestamp::now(),
        }
    }
}
