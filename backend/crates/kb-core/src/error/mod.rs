use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} (expected 0-4) {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid tag mode: {value} (expected 'and' or 'or') {location}")]
    InvalidTagMode {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid date: {value} {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },

    #[error("Item {item_id} not found in working set {location}")]
    ItemNotFound {
        item_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Position precision exhausted in scope {scope_id} {location}")]
    PrecisionExhausted {
        scope_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Renumbering scope {scope_id} failed: {message} {location}")]
    RenumberFailed {
        scope_id: Uuid,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field name for validation-style errors, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidPriority { .. } => Some("priority"),
            Self::InvalidTagMode { .. } => Some("tagMode"),
            _ => None,
        }
    }

    /// True for errors that reject input before storage is touched
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidPriority { .. }
                | Self::InvalidTagMode { .. }
                | Self::InvalidDate { .. }
                | Self::Uuid { .. }
        )
    }
}

pub type Result<T> = StdResult<T, CoreError>;
