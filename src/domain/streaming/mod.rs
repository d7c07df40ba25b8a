//! Live-preview response streaming.
//!
//! Independent of the dialogue engine: picks a contextual template from a
//! serialized conversation summary and emits it as a timed typewriter
//! stream of growing word prefixes.

mod plan;
mod streamer;
mod template;

pub use plan::{word_delay, PlannedChunk, StreamPlan};
pub use streamer::{ResponseStream, ResponseStreamer, StreamChunk, StreamError};
pub use template::{render, select_template, ContextValues, ResponseTemplate};
