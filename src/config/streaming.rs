//! Streaming configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Typewriter streaming configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StreamingConfig {
    /// Base per-word delay in milliseconds
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl StreamingConfig {
    /// Get the base per-word delay as a [`Duration`]
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// Validate streaming configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_delay_ms == 0 {
            return Err(ValidationError::InvalidBaseDelay);
        }
        if self.base_delay_ms > 2000 {
            return Err(ValidationError::BaseDelayTooLarge);
        }
        Ok(())
    }
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

fn default_base_delay_ms() -> u64 {
    50
}
