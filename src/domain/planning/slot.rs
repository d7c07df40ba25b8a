//! The fixed slot order for the planning dialogue.
//!
//! The engine never stores a cursor; the current question is always derived
//! by scanning [`SLOT_ORDER`] for the first unset slot. Keeping the order in
//! one place means the question-asking and answer-interpreting sides cannot
//! drift apart.

use super::snapshot::ConversationSnapshot;

/// A single piece of information the dialogue must collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    PartyType,
    City,
    ActivityPreference,
    PartyName,
    GuestCount,
    Budget,
    PartyDates,
}

/// The one authoritative fill order.
pub const SLOT_ORDER: [Slot; 7] = [
    Slot::PartyType,
    Slot::City,
    Slot::ActivityPreference,
    Slot::PartyName,
    Slot::GuestCount,
    Slot::Budget,
    Slot::PartyDates,
];

impl Slot {
    /// Whether this slot is filled in the given snapshot.
    pub fn is_set(&self, snapshot: &ConversationSnapshot) -> bool {
        match self {
            Slot::PartyType => snapshot.party_type.is_some(),
            Slot::City => snapshot.city.is_some(),
            Slot::ActivityPreference => snapshot.activity_preference.is_some(),
            Slot::PartyName => snapshot.party_name.is_some(),
            Slot::GuestCount => snapshot.guest_count.is_some(),
            Slot::Budget => snapshot.budget.is_some(),
            Slot::PartyDates => snapshot.party_dates.is_some(),
        }
    }
}

/// Returns the first unset slot, or `None` when every slot is filled.
pub fn first_unset(snapshot: &ConversationSnapshot) -> Option<Slot> {
    SLOT_ORDER.iter().copied().find(|slot| !slot.is_set(snapshot))
}
