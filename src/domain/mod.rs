//! Domain layer: foundation value objects, the planning dialogue, and
//! response streaming.

pub mod foundation;
pub mod planning;
pub mod streaming;
