//! Slot-filling dialogue engine.
//!
//! A pure decision function over a conversation snapshot and one user turn.
//! Each call interprets the turn as an answer to the first unset slot,
//! re-scans the slot order, and emits either the next question or the
//! completion summary. No state is held between calls; everything the caller
//! should persist comes back in the reply's [`SnapshotPatch`].

use serde::{Deserialize, Serialize};

use super::extractor;
use super::message::{ActivityCard, MessageKind, MessageMetadata, RichMedia};
use super::slot::{first_unset, Slot};
use super::snapshot::{ConversationSnapshot, ConversationStatus, SnapshotPatch};

/// Quick-reply labels offered for the party type question.
pub const PARTY_TYPE_REPLIES: [&str; 2] = ["Bachelor Party", "Bachelorette Party"];

/// Quick-reply labels offered for the city question.
pub const CITY_REPLIES: [&str; 3] = ["Bangkok", "Pattaya", "Phuket"];

/// Quick-reply labels offered for the activity preference question.
pub const ACTIVITY_REPLIES: [&str; 3] =
    ["Adventure Activities", "Complete Package", "Nightlife Focus"];

/// Input kind of a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    #[default]
    Text,
    QuickReply,
}

/// One user utterance plus its declared input kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub content: String,
    pub kind: TurnKind,
}

impl Turn {
    /// Creates a free-text turn.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TurnKind::Text,
        }
    }

    /// Creates a quick-reply turn.
    pub fn quick_reply(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: TurnKind::QuickReply,
        }
    }
}

/// What the engine decided for one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineReply {
    /// Assistant response text.
    pub text: String,
    /// How the response should be rendered.
    pub kind: MessageKind,
    /// Quick replies or rich media attached to the response.
    pub metadata: Option<MessageMetadata>,
    /// Slot changes the caller should persist.
    pub patch: SnapshotPatch,
    /// Short hint describing what to answer next.
    pub next_prompt: Option<String>,
    /// Whether the caller should advance without further user input.
    pub auto_continue: bool,
}

impl EngineReply {
    fn question(text: String, metadata: Option<MessageMetadata>, hint: &str) -> Self {
        let kind = if metadata
            .as_ref()
            .is_some_and(|m| m.quick_replies.is_some())
        {
            MessageKind::QuickReply
        } else {
            MessageKind::Text
        };
        Self {
            text,
            kind,
            metadata,
            patch: SnapshotPatch::default(),
            next_prompt: Some(hint.to_string()),
            auto_continue: false,
        }
    }
}

/// The slot-filling state machine.
///
/// Stateless and trivially shareable; every decision derives from the
/// snapshot passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueEngine;

impl DialogueEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Processes one user turn against a conversation snapshot.
    ///
    /// Total over its inputs: validation failures repeat the question with a
    /// corrective hint instead of erroring, and a completed conversation gets
    /// a fixed closing acknowledgment.
    pub fn apply_turn(&self, snapshot: &ConversationSnapshot, turn: &Turn) -> EngineReply {
        if snapshot.status.is_completed() {
            return Self::closing_reply(SnapshotPatch::default());
        }

        let mut working = snapshot.clone();
        let mut patch = SnapshotPatch::default();

        let Some(active) = first_unset(&working) else {
            // All slots filled but status never flipped; heal the status and
            // close out.
            let healing = SnapshotPatch {
                status: Some(ConversationStatus::Completed),
                ..Default::default()
            };
            return Self::closing_reply(healing);
        };

        let rejected = !Self::interpret(active, &turn.content, &mut working, &mut patch);

        if rejected {
            if let Some(corrective) = Self::corrective_reply(active) {
                return corrective;
            }
        }

        match first_unset(&working) {
            Some(next) => {
                let mut reply = Self::question_for(next, &working);
                reply.patch = patch;
                reply
            }
            None => Self::completion_reply(&working, patch),
        }
    }

    /// Tries to fill `slot` from the utterance. Returns false on rejection.
    fn interpret(
        slot: Slot,
        utterance: &str,
        working: &mut ConversationSnapshot,
        patch: &mut SnapshotPatch,
    ) -> bool {
        match slot {
            Slot::PartyType => match extractor::party_type_from(utterance) {
                Some(v) => {
                    working.party_type = Some(v);
                    patch.party_type = Some(v);
                    true
                }
                None => false,
            },
            Slot::City => match extractor::city_from(utterance) {
                Some(v) => {
                    working.city = Some(v);
                    patch.city = Some(v);
                    true
                }
                None => false,
            },
            Slot::ActivityPreference => match extractor::activity_preference_from(utterance) {
                Some(v) => {
                    working.activity_preference = Some(v);
                    patch.activity_preference = Some(v);
                    true
                }
                None => false,
            },
            Slot::PartyName => match extractor::party_name_from(utterance) {
                Some(v) => {
                    working.party_name = Some(v.clone());
                    patch.party_name = Some(v);
                    true
                }
                None => false,
            },
            Slot::GuestCount => match extractor::guest_count_from(utterance) {
                Some(v) => {
                    working.guest_count = Some(v);
                    patch.guest_count = Some(v);
                    true
                }
                None => false,
            },
            Slot::Budget => match extractor::budget_from(utterance) {
                Some(v) => {
                    working.budget = Some(v);
                    patch.budget = Some(v);
                    true
                }
                None => false,
            },
            Slot::PartyDates => match extractor::party_dates_from(utterance) {
                Some(v) => {
                    working.party_dates = Some(v.clone());
                    patch.party_dates = Some(v);
                    // Dates acceptance is the one and only completion trigger.
                    working.status = ConversationStatus::Completed;
                    patch.status = Some(ConversationStatus::Completed);
                    true
                }
                None => false,
            },
        }
    }

    /// Corrective re-asks for slots with validation rules. Slots without one
    /// simply get their standard question repeated.
    fn corrective_reply(slot: Slot) -> Option<EngineReply> {
        match slot {
            Slot::GuestCount => Some(EngineReply::question(
                "Please enter a valid number of guests (e.g., 8, 12).".to_string(),
                None,
                "How many people will be attending?",
            )),
            Slot::Budget => Some(EngineReply::question(
                "Please enter a valid budget amount (numbers only, e.g., 5000, 10000)."
                    .to_string(),
                None,
                "What's your budget per person?",
            )),
            _ => None,
        }
    }

    /// The standard question for a slot, phrased against what is already
    /// known. Earlier slots in the fill order are guaranteed set by the time
    /// a question renders, so the ack prefixes can reference them.
    fn question_for(slot: Slot, snapshot: &ConversationSnapshot) -> EngineReply {
        match slot {
            Slot::PartyType => EngineReply::question(
                "Welcome! I'm here to help you plan an amazing party. What type of \
                 celebration are you organizing?"
                    .to_string(),
                Some(MessageMetadata::quick_replies(PARTY_TYPE_REPLIES)),
                "Please select the type of party you're planning.",
            ),
            Slot::City => EngineReply::question(
                "Great choice! Which city would you like to celebrate in? Each \
                 destination offers unique experiences."
                    .to_string(),
                Some(MessageMetadata::quick_replies(CITY_REPLIES)),
                "Please choose your destination city.",
            ),
            Slot::ActivityPreference => {
                let city = snapshot
                    .city
                    .map(|c| c.display_name())
                    .unwrap_or("That");
                EngineReply::question(
                    format!(
                        "Perfect! {} is an amazing destination. What type of experience \
                         are you looking for?",
                        city
                    ),
                    Some(MessageMetadata::quick_replies(ACTIVITY_REPLIES)),
                    "What's your preferred style of celebration?",
                )
            }
            Slot::PartyName => EngineReply::question(
                "Excellent! Now, what should we call this party? This will help \
                 personalize your experience."
                    .to_string(),
                None,
                "Please enter a name for your party (e.g., 'John's Bachelor Bash', \
                 'Sarah's Big Weekend').",
            ),
            Slot::GuestCount => {
                let name = snapshot.party_name.as_deref().unwrap_or("Your party");
                EngineReply::question(
                    format!(
                        "\"{}\" sounds like it's going to be epic! How many people will \
                         be joining the celebration?",
                        name
                    ),
                    None,
                    "Please enter the number of guests (including yourself).",
                )
            }
            Slot::Budget => {
                let count = snapshot.guest_count.unwrap_or(1);
                let noun = if count == 1 { "person" } else { "people" };
                EngineReply::question(
                    format!(
                        "Perfect! For {} {}, what's your budget range per person? This \
                         helps me recommend the best options.",
                        count, noun
                    ),
                    None,
                    "Please enter your budget per person (e.g., 5000, 10000).",
                )
            }
            Slot::PartyDates => {
                let budget = snapshot.budget.unwrap_or(0.0);
                EngineReply::question(
                    format!(
                        "Great! With a budget of {} per person, we can create something \
                         amazing. When are you planning to celebrate?",
                        budget
                    ),
                    None,
                    "Please provide your preferred dates (e.g., 'March 15-17' or 'Next \
                     weekend').",
                )
            }
        }
    }

    /// The summary emitted in the same call that accepts the party dates.
    fn completion_reply(snapshot: &ConversationSnapshot, patch: SnapshotPatch) -> EngineReply {
        let party_name = snapshot.party_name.as_deref().unwrap_or("your party");
        let party_type = snapshot
            .party_type
            .map(|t| t.label())
            .unwrap_or("Bachelor");
        let city = snapshot
            .city
            .map(|c| c.display_name())
            .unwrap_or("Bangkok");
        let guest_count = snapshot.guest_count.unwrap_or(0);
        let budget = snapshot.budget.unwrap_or(0.0);
        let dates = snapshot.party_dates.as_deref().unwrap_or("");
        let focus = snapshot
            .activity_preference
            .map(|p| p.to_string())
            .unwrap_or_else(|| "activities".to_string());

        let text = format!(
            "Fantastic! I have all the details for {}:\n\n\
             🎉 {} Party in {}\n\
             👥 {} guests\n\
             💰 {} per person\n\
             📅 {}\n\
             🎯 Focus: {}\n\n\
             I'm now preparing personalized recommendations for your group. You'll \
             receive a detailed itinerary shortly!",
            party_name, party_type, city, guest_count, budget, dates, focus
        );

        let metadata = MessageMetadata::rich_media(RichMedia {
            images: None,
            activities: Some(vec![ActivityCard {
                name: "Custom Itinerary".to_string(),
                description: "Personalized recommendations being prepared".to_string(),
                cost: snapshot.budget,
                image_url: None,
            }]),
            itinerary: None,
        });

        EngineReply {
            text,
            kind: MessageKind::RichMedia,
            metadata: Some(metadata),
            patch,
            next_prompt: None,
            auto_continue: false,
        }
    }

    /// Fixed acknowledgment for conversations that are already complete.
    fn closing_reply(patch: SnapshotPatch) -> EngineReply {
        EngineReply {
            text: "Your party planning is complete! I'll be in touch with your \
                   personalized itinerary soon."
                .to_string(),
            kind: MessageKind::Text,
            metadata: None,
            patch,
            next_prompt: None,
            auto_continue: false,
        }
    }
}
