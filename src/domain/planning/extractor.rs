//! Per-slot interpretation of user utterances.
//!
//! These are intentionally shallow keyword-containment and number-parsing
//! checks, not intent classification. Each helper returns `None` when the
//! utterance does not answer its slot, which makes the engine repeat the
//! question.

use super::snapshot::{ActivityPreference, City, PartyType};

/// Interprets an utterance as a party type.
///
/// "bachelorette" wins over "bachelor" since the former contains the latter.
pub fn party_type_from(utterance: &str) -> Option<PartyType> {
    let lower = utterance.to_lowercase();
    if lower.contains("bachelorette") {
        Some(PartyType::Bachelorette)
    } else if lower.contains("bachelor") {
        Some(PartyType::Bachelor)
    } else {
        None
    }
}

/// Interprets an utterance as a destination city.
pub fn city_from(utterance: &str) -> Option<City> {
    let lower = utterance.to_lowercase();
    if lower.contains("bangkok") {
        Some(City::Bangkok)
    } else if lower.contains("pattaya") {
        Some(City::Pattaya)
    } else if lower.contains("phuket") {
        Some(City::Phuket)
    } else {
        None
    }
}

/// Interprets an utterance as an activity preference.
pub fn activity_preference_from(utterance: &str) -> Option<ActivityPreference> {
    let lower = utterance.to_lowercase();
    if lower.contains("activities") || lower.contains("adventure") {
        Some(ActivityPreference::Activities)
    } else if lower.contains("package") || lower.contains("complete") {
        Some(ActivityPreference::Package)
    } else if lower.contains("nightlife") {
        Some(ActivityPreference::Nightlife)
    } else {
        None
    }
}

/// Accepts any non-empty trimmed text verbatim as the party name.
pub fn party_name_from(utterance: &str) -> Option<String> {
    let trimmed = utterance.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a leading positive integer as the guest count.
///
/// "8 people" yields 8; text without a leading number is rejected.
pub fn guest_count_from(utterance: &str) -> Option<u32> {
    let trimmed = utterance.trim();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    match digits.parse::<u32>() {
        Ok(count) if count > 0 => Some(count),
        _ => None,
    }
}

/// Parses a positive decimal budget, ignoring currency symbols and separators.
///
/// Strips everything but digits and decimal points before parsing, so
/// "$5,000.50" yields 5000.50. A second decimal point fails the parse.
pub fn budget_from(utterance: &str) -> Option<f64> {
    let numeric: String = utterance
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    match numeric.parse::<f64>() {
        Ok(budget) if budget > 0.0 => Some(budget),
        _ => None,
    }
}

/// Accepts any non-empty trimmed text verbatim as the party dates.
pub fn party_dates_from(utterance: &str) -> Option<String> {
    party_name_from(utterance)
}
