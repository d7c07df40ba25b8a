//! Itinerary synthesis from a conversation snapshot.
//!
//! The catalog is static, read-only data: per city and activity preference,
//! a short list of activities with a per-guest cost expressed as a fraction
//! of the party's per-person budget. Synthesis is deterministic and total;
//! unset slots fall back to defaults so a partially-filled conversation
//! still gets an itinerary.

use super::message::{ActivityCard, DayItinerary, ItineraryStop, MessageMetadata, RichMedia};
use super::snapshot::{ActivityPreference, City, ConversationSnapshot, PartyType};

/// Defaults applied when the conversation has not filled a slot yet.
const DEFAULT_CITY: City = City::Bangkok;
const DEFAULT_PREFERENCE: ActivityPreference = ActivityPreference::Nightlife;
const DEFAULT_BUDGET: f64 = 5000.0;
const DEFAULT_GUEST_COUNT: u32 = 8;

/// Fixed start times by itinerary position.
const TIME_SLOTS: [&str; 5] = ["10:00", "14:00", "17:00", "19:30", "22:00"];

/// One catalog activity: display name, location blurb, and the share of the
/// per-person budget it should cost.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub location: &'static str,
    pub budget_fraction: f64,
}

const fn entry(name: &'static str, location: &'static str, budget_fraction: f64) -> CatalogEntry {
    CatalogEntry {
        name,
        location,
        budget_fraction,
    }
}

static BANGKOK_NIGHTLIFE: [CatalogEntry; 4] = [
    entry("Sky Bar Experience", "Lebua State Tower", 0.15),
    entry("Khao San Road Crawl", "Street Food & Bars", 0.10),
    entry("Rooftop Club Night", "Octave Rooftop Bar", 0.20),
    entry("Tuk-Tuk Night Tour", "Temple & Market Tour", 0.08),
];

static BANGKOK_ACTIVITIES: [CatalogEntry; 4] = [
    entry("Thai Cooking Class", "Authentic Local Experience", 0.12),
    entry("Floating Market Visit", "Damnoen Saduak Market", 0.10),
    entry("Temple Hopping Tour", "Wat Pho & Grand Palace", 0.15),
    entry("Chao Phraya River Cruise", "Sunset Dinner Cruise", 0.18),
];

static BANGKOK_PACKAGE: [CatalogEntry; 3] = [
    entry("VIP Party Package", "All-Inclusive Night Out", 0.40),
    entry("Cultural Experience Day", "Temples + Cooking + Markets", 0.25),
    entry("Adventure Day Trip", "Ayutthaya Historical Park", 0.20),
];

static PATTAYA_NIGHTLIFE: [CatalogEntry; 4] = [
    entry("Walking Street Party", "Famous Nightlife District", 0.12),
    entry("Beach Club Experience", "Beach Road Clubs", 0.18),
    entry("Cabaret Show", "Tiffany's or Alcazar", 0.15),
    entry("Rooftop Bar Crawl", "Sky Gallery & More", 0.14),
];

static PATTAYA_ACTIVITIES: [CatalogEntry; 4] = [
    entry("Coral Island Day Trip", "Snorkeling & Beach Fun", 0.16),
    entry("Jet Ski Adventure", "Pattaya Beach Water Sports", 0.12),
    entry("Sanctuary of Truth", "Ancient Wooden Temple", 0.08),
    entry("Nong Nooch Garden", "Tropical Garden & Shows", 0.10),
];

static PATTAYA_PACKAGE: [CatalogEntry; 3] = [
    entry("Beach & Nightlife Combo", "Day at Beach + Night Out", 0.35),
    entry("Adventure Water Package", "All Water Sports Included", 0.28),
    entry("Cultural & Entertainment", "Shows + Temples + Gardens", 0.22),
];

static PHUKET_NIGHTLIFE: [CatalogEntry; 4] = [
    entry("Bangla Road Experience", "Patong's Famous Street", 0.14),
    entry("Beach Club Sunset", "Kata Rocks or Catch", 0.22),
    entry("Phi Phi Party Cruise", "Island Hopping with Drinks", 0.25),
    entry("Old Town Bar Crawl", "Historic Phuket Town", 0.12),
];

static PHUKET_ACTIVITIES: [CatalogEntry; 4] = [
    entry("James Bond Island Tour", "Phang Nga Bay Adventure", 0.18),
    entry("Elephant Sanctuary Visit", "Ethical Elephant Experience", 0.15),
    entry("Big Buddha & Temples", "Cultural Sightseeing Tour", 0.10),
    entry("Snorkeling at Similan", "World-Class Diving Spots", 0.20),
];

static PHUKET_PACKAGE: [CatalogEntry; 3] = [
    entry("Island Paradise Package", "Multi-Island Tour + Dining", 0.40),
    entry("Adventure & Culture Mix", "Activities + Temples + Markets", 0.30),
    entry("Luxury Beach Experience", "Premium Beach Clubs + Spa", 0.45),
];

/// The catalog entries for a city and preference, in display order.
pub fn catalog_for(city: City, preference: ActivityPreference) -> &'static [CatalogEntry] {
    match (city, preference) {
        (City::Bangkok, ActivityPreference::Nightlife) => &BANGKOK_NIGHTLIFE,
        (City::Bangkok, ActivityPreference::Activities) => &BANGKOK_ACTIVITIES,
        (City::Bangkok, ActivityPreference::Package) => &BANGKOK_PACKAGE,
        (City::Pattaya, ActivityPreference::Nightlife) => &PATTAYA_NIGHTLIFE,
        (City::Pattaya, ActivityPreference::Activities) => &PATTAYA_ACTIVITIES,
        (City::Pattaya, ActivityPreference::Package) => &PATTAYA_PACKAGE,
        (City::Phuket, ActivityPreference::Nightlife) => &PHUKET_NIGHTLIFE,
        (City::Phuket, ActivityPreference::Activities) => &PHUKET_ACTIVITIES,
        (City::Phuket, ActivityPreference::Package) => &PHUKET_PACKAGE,
    }
}

/// Reference images shown alongside an itinerary.
pub fn images_for(city: City) -> [&'static str; 3] {
    match city {
        City::Bangkok => [
            "https://example.com/bangkok-skyline.jpg",
            "https://example.com/bangkok-temples.jpg",
            "https://example.com/bangkok-nightlife.jpg",
        ],
        City::Pattaya => [
            "https://example.com/pattaya-beach.jpg",
            "https://example.com/pattaya-walking-street.jpg",
            "https://example.com/pattaya-activities.jpg",
        ],
        City::Phuket => [
            "https://example.com/phuket-beaches.jpg",
            "https://example.com/phuket-islands.jpg",
            "https://example.com/phuket-nightlife.jpg",
        ],
    }
}

/// Start time for the activity at `index`, extending past the fixed table
/// by two hours per slot.
pub fn time_slot(index: usize) -> String {
    TIME_SLOTS
        .get(index)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{}:00", 10 + index * 2))
}

/// A synthesized itinerary: narrative text plus renderable metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryResponse {
    pub text: String,
    pub metadata: MessageMetadata,
}

/// Builds a one-day itinerary from whatever the conversation has collected.
///
/// Deterministic for a given snapshot; never fails. Unset slots default to
/// Bangkok / nightlife / 5000 per person / 8 guests.
pub fn synthesize_itinerary(snapshot: &ConversationSnapshot) -> ItineraryResponse {
    let city = snapshot.city.unwrap_or(DEFAULT_CITY);
    let preference = snapshot.activity_preference.unwrap_or(DEFAULT_PREFERENCE);
    let party_type = snapshot.party_type.unwrap_or(PartyType::Bachelor);
    let budget = snapshot.budget.unwrap_or(DEFAULT_BUDGET);
    let guest_count = snapshot.guest_count.unwrap_or(DEFAULT_GUEST_COUNT);
    let party_name = snapshot.party_name.as_deref().unwrap_or("the party");

    let entries = catalog_for(city, preference);

    let cards: Vec<ActivityCard> = entries
        .iter()
        .map(|e| ActivityCard {
            name: e.name.to_string(),
            description: e.location.to_string(),
            cost: Some(per_guest_cost(budget, guest_count, e.budget_fraction)),
            image_url: None,
        })
        .collect();

    let stops: Vec<ItineraryStop> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| ItineraryStop {
            time: time_slot(i),
            activity: card.name.clone(),
            location: card.description.clone(),
            cost: card.cost,
        })
        .collect();

    let metadata = MessageMetadata::rich_media(RichMedia {
        images: Some(images_for(city).iter().map(|s| s.to_string()).collect()),
        // Top three activities as highlights, full list in the day plan.
        activities: Some(cards.into_iter().take(3).collect()),
        itinerary: Some(DayItinerary {
            day: 1,
            activities: stops,
        }),
    });

    let text = format!(
        "Here's your personalized {} Party itinerary for {} in {}! 🎉 Get ready for \
         an unforgettable experience!",
        party_type.label(),
        party_name,
        city.display_name()
    );

    ItineraryResponse { text, metadata }
}

fn per_guest_cost(budget: f64, guest_count: u32, fraction: f64) -> f64 {
    (budget * fraction / guest_count as f64).round()
}
