//! Conversation snapshot and slot values.
//!
//! A snapshot is the caller-owned view of everything the dialogue has
//! collected so far. The engine reads a snapshot, never stores one; the
//! changes it wants persisted come back as a [`SnapshotPatch`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::UserId;

/// Kind of celebration being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyType {
    Bachelor,
    Bachelorette,
}

impl PartyType {
    /// Capitalized label for user-facing text.
    pub fn label(&self) -> &'static str {
        match self {
            PartyType::Bachelor => "Bachelor",
            PartyType::Bachelorette => "Bachelorette",
        }
    }
}

impl fmt::Display for PartyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PartyType::Bachelor => "bachelor",
            PartyType::Bachelorette => "bachelorette",
        };
        write!(f, "{}", s)
    }
}

/// Destination city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Bangkok,
    Pattaya,
    Phuket,
}

impl City {
    /// Capitalized city name for user-facing text.
    pub fn display_name(&self) -> &'static str {
        match self {
            City::Bangkok => "Bangkok",
            City::Pattaya => "Pattaya",
            City::Phuket => "Phuket",
        }
    }

    /// All supported cities, in quick-reply order.
    pub fn all() -> [City; 3] {
        [City::Bangkok, City::Pattaya, City::Phuket]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            City::Bangkok => "bangkok",
            City::Pattaya => "pattaya",
            City::Phuket => "phuket",
        };
        write!(f, "{}", s)
    }
}

/// Preferred style of celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityPreference {
    Activities,
    Package,
    Nightlife,
}

impl fmt::Display for ActivityPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityPreference::Activities => "activities",
            ActivityPreference::Package => "package",
            ActivityPreference::Nightlife => "nightlife",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle status of a planning conversation.
///
/// `Active` while slots are still being gathered, `Completed` once the
/// party dates are accepted. `Paused` is representable for storage parity
/// but the engine derives everything from filled slots, so a paused
/// conversation simply resumes at its first unset slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

impl ConversationStatus {
    /// Returns true once all details are gathered.
    pub fn is_completed(&self) -> bool {
        matches!(self, ConversationStatus::Completed)
    }
}

/// Caller-owned view of a planning conversation's collected details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConversationSnapshot {
    /// Owner of the conversation; the engine never reads it.
    pub user_id: Option<UserId>,
    pub party_type: Option<PartyType>,
    pub city: Option<City>,
    pub activity_preference: Option<ActivityPreference>,
    pub party_name: Option<String>,
    pub guest_count: Option<u32>,
    /// Budget per guest, in whole currency units (may carry decimals).
    pub budget: Option<f64>,
    /// Free-text date range, e.g. "March 15-17".
    pub party_dates: Option<String>,
    /// Optional theme, carried for storage parity; the engine never reads it.
    pub theme: Option<String>,
    /// Optional serialized preferences blob, also pass-through.
    pub preferences: Option<String>,
    pub status: ConversationStatus,
}

impl ConversationSnapshot {
    /// Fresh snapshot with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The subset of snapshot fields changed by processing one turn.
///
/// `None` means "unchanged"; the patch never clears a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SnapshotPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_type: Option<PartyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_preference: Option<ActivityPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_dates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConversationStatus>,
}

impl SnapshotPatch {
    /// Returns true if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.party_type.is_none()
            && self.city.is_none()
            && self.activity_preference.is_none()
            && self.party_name.is_none()
            && self.guest_count.is_none()
            && self.budget.is_none()
            && self.party_dates.is_none()
            && self.theme.is_none()
            && self.preferences.is_none()
            && self.status.is_none()
    }

    /// Applies the patch to a snapshot, last write wins.
    pub fn apply(&self, snapshot: &mut ConversationSnapshot) {
        if let Some(v) = self.party_type {
            snapshot.party_type = Some(v);
        }
        if let Some(v) = self.city {
            snapshot.city = Some(v);
        }
        if let Some(v) = self.activity_preference {
            snapshot.activity_preference = Some(v);
        }
        if let Some(v) = &self.party_name {
            snapshot.party_name = Some(v.clone());
        }
        if let Some(v) = self.guest_count {
            snapshot.guest_count = Some(v);
        }
        if let Some(v) = self.budget {
            snapshot.budget = Some(v);
        }
        if let Some(v) = &self.party_dates {
            snapshot.party_dates = Some(v.clone());
        }
        if let Some(v) = &self.theme {
            snapshot.theme = Some(v.clone());
        }
        if let Some(v) = &self.preferences {
            snapshot.preferences = Some(v.clone());
        }
        if let Some(v) = self.status {
            snapshot.status = v;
        }
    }
}
