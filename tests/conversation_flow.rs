//! Integration tests for the full party planning flow.
//!
//! These tests verify the end-to-end path:
//! 1. ProcessTurnHandler drives the slot-filling dialogue turn by turn
//! 2. Accepting the party dates flips the conversation to Completed
//! 3. GenerateItineraryHandler synthesizes and persists the itinerary
//! 4. ResponseStreamer emits the streamed preview for a turn
//!
//! Uses the in-memory store to exercise the flow without external dependencies.

use std::sync::Arc;

use party_concierge::adapters::InMemoryConversationStore;
use party_concierge::application::handlers::{
    GenerateItineraryCommand, GenerateItineraryError, GenerateItineraryHandler,
    ProcessTurnCommand, ProcessTurnError, ProcessTurnHandler,
};
use party_concierge::domain::foundation::{ConversationId, UserId};
use party_concierge::domain::planning::{
    ConversationSnapshot, ConversationStatus, MessageKind, MessageRole,
};
use party_concierge::domain::streaming::ResponseStreamer;
use party_concierge::ports::ConversationStore;

struct TestFixture {
    store: Arc<InMemoryConversationStore>,
    turns: ProcessTurnHandler<InMemoryConversationStore>,
    itineraries: GenerateItineraryHandler<InMemoryConversationStore>,
}

impl TestFixture {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();

        let store = Arc::new(InMemoryConversationStore::new());
        Self {
            turns: ProcessTurnHandler::new(Arc::clone(&store)),
            itineraries: GenerateItineraryHandler::new(Arc::clone(&store)),
            store,
        }
    }

    async fn start_conversation(&self) -> ConversationId {
        let id = ConversationId::new();
        let snapshot = ConversationSnapshot {
            user_id: Some(UserId::new()),
            ..ConversationSnapshot::new()
        };
        self.store.insert(id, snapshot).await;
        id
    }

    async fn say(&self, id: ConversationId, content: &str) -> String {
        self.turns
            .handle(ProcessTurnCommand::text(id, content))
            .await
            .unwrap()
            .message
            .content
    }

    async fn tap(&self, id: ConversationId, label: &str) -> String {
        self.turns
            .handle(ProcessTurnCommand::quick_reply(id, label))
            .await
            .unwrap()
            .message
            .content
    }
}

#[tokio::test]
async fn full_conversation_reaches_completion_and_yields_an_itinerary() {
    let fixture = TestFixture::new();
    let id = fixture.start_conversation().await;

    // Opening turn only elicits the first question.
    let reply = fixture.say(id, "hi there").await;
    assert!(reply.contains("What type of celebration"));

    let reply = fixture.tap(id, "Bachelor Party").await;
    assert!(reply.contains("Which city"));

    let reply = fixture.tap(id, "Bangkok").await;
    assert!(reply.contains("Bangkok is an amazing destination"));

    let reply = fixture.tap(id, "Nightlife Focus").await;
    assert!(reply.contains("what should we call this party"));

    let reply = fixture.say(id, "John's Bachelor Bash").await;
    assert!(reply.contains("John's Bachelor Bash"));
    assert!(reply.contains("How many people"));

    let reply = fixture.say(id, "8 people").await;
    assert!(reply.contains("For 8 people"));

    let reply = fixture.say(id, "5000").await;
    assert!(reply.contains("When are you planning to celebrate"));

    let summary = fixture.say(id, "March 15-17").await;
    assert!(summary.contains("Fantastic! I have all the details"));
    assert!(summary.contains("Bachelor Party in Bangkok"));
    assert!(summary.contains("8 guests"));

    let snapshot = fixture.store.find_snapshot(&id).await.unwrap().unwrap();
    assert_eq!(snapshot.status, ConversationStatus::Completed);
    assert_eq!(snapshot.party_dates.as_deref(), Some("March 15-17"));

    // Itinerary synthesis uses the collected slots.
    let itinerary = fixture
        .itineraries
        .handle(GenerateItineraryCommand {
            conversation_id: id,
        })
        .await
        .unwrap();
    assert_eq!(itinerary.kind, MessageKind::Itinerary);
    assert!(itinerary.content.contains("Bachelor Party itinerary"));
    assert!(itinerary.content.contains("Bangkok"));

    let media = itinerary.metadata.unwrap().rich_media.unwrap();
    let day = media.itinerary.unwrap();
    assert_eq!(day.day, 1);
    assert!(!day.activities.is_empty());

    // Every stop's cost is derived from the per-guest budget split.
    for stop in &day.activities {
        assert!(stop.cost.is_some_and(|c| c > 0.0));
    }

    // Turns after completion get the closing acknowledgment, no re-asks.
    let reply = fixture.say(id, "can we add karaoke?").await;
    assert!(reply.contains("planning is complete"));
}

#[tokio::test]
async fn invalid_answers_repeat_the_question_without_advancing() {
    let fixture = TestFixture::new();
    let id = fixture.start_conversation().await;

    fixture.tap(id, "Bachelorette Party").await;
    fixture.tap(id, "Phuket").await;
    fixture.tap(id, "Adventure Activities").await;
    fixture.say(id, "Sarah's Big Weekend").await;

    // Guest count rejects non-numeric input with a corrective hint.
    let reply = fixture.say(id, "a bunch of us").await;
    assert!(reply.contains("valid number of guests"));

    let snapshot = fixture.store.find_snapshot(&id).await.unwrap().unwrap();
    assert_eq!(snapshot.guest_count, None);
    assert_eq!(snapshot.status, ConversationStatus::Active);

    // A valid retry advances to the budget question.
    let reply = fixture.say(id, "12").await;
    assert!(reply.contains("For 12 people"));
}

#[tokio::test]
async fn message_log_preserves_arrival_order_and_roles() {
    let fixture = TestFixture::new();
    let id = fixture.start_conversation().await;

    fixture.say(id, "hello").await;
    fixture.tap(id, "Bachelor Party").await;

    let messages = fixture.store.messages(&id).await.unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content, "hello");
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert_eq!(messages[2].role, MessageRole::User);
    assert_eq!(messages[2].kind, MessageKind::QuickReply);
    assert_eq!(messages[3].role, MessageRole::Assistant);
}

#[tokio::test]
async fn handlers_reject_unknown_conversations() {
    let fixture = TestFixture::new();
    let missing = ConversationId::new();

    let err = fixture
        .turns
        .handle(ProcessTurnCommand::text(missing, "hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProcessTurnError::ConversationNotFound(_)));

    let err = fixture
        .itineraries
        .handle(GenerateItineraryCommand {
            conversation_id: missing,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateItineraryError::ConversationNotFound(_)
    ));
}

#[tokio::test]
async fn streamed_preview_grows_to_the_full_response() {
    let streamer = ResponseStreamer::instant();
    let mut stream = streamer.stream_response(
        "What are the best party ideas?",
        "party_type: bachelor, city: bangkok, guest_count: 8, budget: 5000",
    );

    let mut chunks = Vec::new();
    while let Some(chunk) = stream.next_chunk().await {
        chunks.push(chunk);
    }

    assert!(chunks.len() > 1);
    for pair in chunks.windows(2) {
        assert!(pair[1].text.len() > pair[0].text.len());
        assert!(pair[1].text.starts_with(&pair[0].text));
    }

    let last = chunks.last().unwrap();
    assert!(last.is_final);
    assert!(last.message_id.is_some());
    assert!(last.text.contains("Bangkok"));
}
