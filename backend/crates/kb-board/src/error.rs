use kb_core::CoreError;
use kb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by a board session and its storage adapters
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Board rule violated: {source} {location}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },

    /// The store could not be reached or rejected the write
    #[error("Persistence failed: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },

    /// The REST API answered with an error body
    #[error("API error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },
}

impl BoardError {
    #[track_caller]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the failure came from the storage side rather than from
    /// the session's own ordering rules
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Persistence { .. } | Self::Api { .. } | Self::Json { .. } | Self::NotFound { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Api { code, .. } => code == "NOT_FOUND",
            Self::Core {
                source: CoreError::ItemNotFound { .. },
                ..
            } => true,
            _ => false,
        }
    }
}

impl From<CoreError> for BoardError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for BoardError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        if let DbError::NotFound { entity, id, .. } = &err {
            return Self::not_found(*entity, id);
        }
        Self::persistence(err.to_string())
    }
}

impl From<reqwest::Error> for BoardError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::persistence(err.to_string())
    }
}

impl From<serde_json::Error> for BoardError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
