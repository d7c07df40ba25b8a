//! Party Concierge - Conversational Party Planning Engine
//!
//! This crate implements a slot-filling dialogue that gathers party details
//! one question at a time, synthesizes itineraries from a curated catalog,
//! and streams assistant replies as a timed typewriter effect.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
