//! Command handlers orchestrating the domain against the ports.

mod generate_itinerary;
mod process_turn;

pub use generate_itinerary::{
    GenerateItineraryCommand, GenerateItineraryError, GenerateItineraryHandler,
};
pub use process_turn::{ProcessTurnCommand, ProcessTurnError, ProcessTurnHandler, TurnOutcome};
