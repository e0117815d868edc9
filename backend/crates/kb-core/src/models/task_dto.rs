use crate::models::column_dto::{parse_millis, parse_uuid};
use crate::{CoreError, CoreResult, Position, Priority, Task};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Task DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: String,
    pub project_id: String,
    pub board_id: String,
    pub column_id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: i64,
    pub position: f64,
    pub assignee_id: Option<String>,
    /// ISO date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// ISO date (YYYY-MM-DD)
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub archived_at: Option<i64>,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            project_id: t.project_id.to_string(),
            board_id: t.board_id.to_string(),
            column_id: t.column_id.to_string(),
            title: t.title,
            description: t.description,
            priority: t.priority.into(),
            position: t.position.value(),
            assignee_id: t.assignee_id.map(|id| id.to_string()),
            start_date: t.start_date.map(|d| d.to_string()),
            due_date: t.due_date.map(|d| d.to_string()),
            tags: t.tags.iter().map(|id| id.to_string()).collect(),
            created_at: t.created_at.timestamp_millis(),
            updated_at: t.updated_at.timestamp_millis(),
            archived_at: t.archived_at.map(|dt| dt.timestamp_millis()),
        }
    }
}

impl TryFrom<TaskDto> for Task {
    type Error = CoreError;

    #[track_caller]
    fn try_from(dto: TaskDto) -> CoreResult<Self> {
        Ok(Task {
            id: parse_uuid(&dto.id)?,
            project_id: parse_uuid(&dto.project_id)?,
            board_id: parse_uuid(&dto.board_id)?,
            column_id: parse_uuid(&dto.column_id)?,
            title: dto.title,
            description: dto.description,
            priority: Priority::new(dto.priority)?,
            position: Position::new(dto.position)?,
            assignee_id: dto.assignee_id.as_deref().map(parse_uuid).transpose()?,
            start_date: dto.start_date.as_deref().map(parse_date).transpose()?,
            due_date: dto.due_date.as_deref().map(parse_date).transpose()?,
            tags: dto
                .tags
                .iter()
                .map(|id| parse_uuid(id))
                .collect::<CoreResult<_>>()?,
            created_at: parse_millis(dto.created_at, "created_at")?,
            updated_at: parse_millis(dto.updated_at, "updated_at")?,
            archived_at: dto
                .archived_at
                .map(|ms| parse_millis(ms, "archived_at"))
                .transpose()?,
        })
    }
}

/// Parse an ISO calendar date (YYYY-MM-DD).
///
/// The year must be exactly four digits: dates are stored as text and
/// compared as strings, which only orders correctly at a fixed width.
#[track_caller]
pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    let trimmed = value.trim();
    let invalid = || CoreError::InvalidDate {
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let year_is_four_digits = trimmed.len() == 10
        && trimmed.as_bytes()[..4].iter().all(u8::is_ascii_digit)
        && trimmed.as_bytes()[4] == b'-';
    if !year_is_four_digits {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}
