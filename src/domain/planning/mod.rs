//! Party-planning dialogue domain.
//!
//! The slot-filling engine, its snapshot/patch data model, utterance
//! interpretation, and itinerary synthesis.

mod engine;
mod extractor;
mod itinerary;
mod message;
mod slot;
mod snapshot;

pub use engine::{
    DialogueEngine, EngineReply, Turn, TurnKind, ACTIVITY_REPLIES, CITY_REPLIES,
    PARTY_TYPE_REPLIES,
};
pub use extractor::{
    activity_preference_from, budget_from, city_from, guest_count_from, party_dates_from,
    party_name_from, party_type_from,
};
pub use itinerary::{
    catalog_for, images_for, synthesize_itinerary, time_slot, CatalogEntry, ItineraryResponse,
};
pub use message::{
    ActivityCard, DayItinerary, ItineraryStop, MessageKind, MessageMetadata, MessageRole,
    RichMedia, StoredMessage,
};
pub use slot::{first_unset, Slot, SLOT_ORDER};
pub use snapshot::{
    ActivityPreference, City, ConversationSnapshot, ConversationStatus, PartyType, SnapshotPatch,
};
