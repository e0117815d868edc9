//! Fractional order key for columns and tasks.

use crate::{CoreError, CoreResult};

use std::cmp::Ordering;
use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Ordered numeric key defining display order within a scope.
///
/// Backed by `f64`; comparisons use `total_cmp` so the type is `Ord`.
/// Non-finite values are rejected at construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Position(f64);

impl Position {
    /// Build a key from a raw value, rejecting NaN and infinities
    #[track_caller]
    pub fn new(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::Validation {
                message: format!("position must be a finite number, got {}", value),
                field: Some("position".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        // -0.0 and 0.0 must compare equal under total_cmp
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Build a key from a client-supplied value: non-finite is rejected,
    /// finite values are clamped into `[-limit, limit]`.
    #[track_caller]
    pub fn sanitize(value: f64, limit: f64) -> CoreResult<Self> {
        let position = Self::new(value)?;
        Ok(Self(position.0.clamp(-limit.abs(), limit.abs())))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Position {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: f64) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<Position> for f64 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
