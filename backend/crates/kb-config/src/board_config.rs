use crate::{ConfigError, ConfigErrorResult, DEFAULT_POSITION_LIMIT, DEFAULT_ROLLBACK_ON_FAILURE};

use kb_core::{DEFAULT_POSITION, DEFAULT_RENUMBER_STEP, PositionAllocator};
use serde::Deserialize;

/// Ordering and mutation behaviour shared by the server and client sessions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key given to the first item of an empty scope
    pub default_position: f64,
    /// Spacing used when renumbering a scope and when appending new items
    pub renumber_step: f64,
    /// Client-supplied keys are clamped into `[-limit, limit]`
    pub position_limit: f64,
    /// Restore the pre-move state when persisting a move fails
    pub rollback_on_failure: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_position: DEFAULT_POSITION,
            renumber_step: DEFAULT_RENUMBER_STEP,
            position_limit: DEFAULT_POSITION_LIMIT,
            rollback_on_failure: DEFAULT_ROLLBACK_ON_FAILURE,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.default_position.is_finite() {
            return Err(ConfigError::board(format!(
                "board.default_position must be finite, got {}",
                self.default_position
            )));
        }

        if !self.renumber_step.is_finite() || self.renumber_step <= 0.0 {
            return Err(ConfigError::board(format!(
                "board.renumber_step must be a positive number, got {}",
                self.renumber_step
            )));
        }

        if !self.position_limit.is_finite() || self.position_limit <= self.default_position.abs()
        {
            return Err(ConfigError::board(format!(
                "board.position_limit must be finite and above |default_position|, got {}",
                self.position_limit
            )));
        }

        Ok(())
    }

    pub fn allocator(&self) -> PositionAllocator {
        PositionAllocator::new(self.default_position, self.renumber_step)
    }
}
