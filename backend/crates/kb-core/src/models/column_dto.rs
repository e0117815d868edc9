use crate::{Column, CoreError, CoreResult, Position};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Column DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDto {
    pub id: String,
    pub board_id: String,
    pub title: String,
    pub color: Option<String>,
    pub position: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Column> for ColumnDto {
    fn from(c: Column) -> Self {
        Self {
            id: c.id.to_string(),
            board_id: c.board_id.to_string(),
            title: c.title,
            color: c.color,
            position: c.position.value(),
            created_at: c.created_at.timestamp_millis(),
            updated_at: c.updated_at.timestamp_millis(),
        }
    }
}

impl TryFrom<ColumnDto> for Column {
    type Error = CoreError;

    #[track_caller]
    fn try_from(dto: ColumnDto) -> CoreResult<Self> {
        Ok(Column {
            id: parse_uuid(&dto.id)?,
            board_id: parse_uuid(&dto.board_id)?,
            title: dto.title,
            color: dto.color,
            position: Position::new(dto.position)?,
            created_at: parse_millis(dto.created_at, "created_at")?,
            updated_at: parse_millis(dto.updated_at, "updated_at")?,
        })
    }
}

#[track_caller]
pub(crate) fn parse_uuid(value: &str) -> CoreResult<Uuid> {
    Uuid::parse_str(value).map_err(|source| CoreError::Uuid {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_millis(value: i64, field: &str) -> CoreResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value).ok_or_else(|| CoreError::Validation {
        message: format!("{} is not a valid timestamp: {}", field, value),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
