//! Checks applied to request bodies before anything is stored.

use crate::{ApiError, ApiResult};

use kb_config::ValidationConfig;
use kb_core::{Position, Priority};

use uuid::Uuid;

pub fn sanitize_string(s: &str) -> String {
    s.trim().to_string()
}

#[track_caller]
pub fn parse_id(raw: &str, field: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|e| ApiError::validation(format!("Invalid UUID format: {}", e), field))
}

#[track_caller]
pub fn parse_optional_id(raw: Option<&str>, field: &str) -> ApiResult<Option<Uuid>> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_id(s, field))
        .transpose()
}

/// Trimmed, non-empty, at most `max_title_length` characters
#[track_caller]
pub fn title(raw: &str, limits: &ValidationConfig) -> ApiResult<String> {
    let title = sanitize_string(raw);
    if title.is_empty() {
        return Err(ApiError::validation("Title cannot be empty", "title"));
    }
    if title.chars().count() > limits.max_title_length {
        return Err(ApiError::validation(
            format!(
                "Title must be at most {} characters",
                limits.max_title_length
            ),
            "title",
        ));
    }
    Ok(title)
}

/// Blank descriptions are stored as NULL
#[track_caller]
pub fn description(raw: Option<&str>, limits: &ValidationConfig) -> ApiResult<Option<String>> {
    let Some(description) = raw.map(sanitize_string).filter(|d| !d.is_empty()) else {
        return Ok(None);
    };
    if description.chars().count() > limits.max_description_length {
        return Err(ApiError::validation(
            format!(
                "Description must be at most {} characters",
                limits.max_description_length
            ),
            "description",
        ));
    }
    Ok(Some(description))
}

/// Client-supplied key: non-finite rejected, finite clamped to the limit
#[track_caller]
pub fn position(value: f64, limit: f64) -> ApiResult<Position> {
    Ok(Position::sanitize(value, limit)?)
}

#[track_caller]
pub fn priority(value: i64) -> ApiResult<Priority> {
    Ok(Priority::new(value)?)
}

#[track_caller]
pub fn date(raw: Option<&str>, field: &str) -> ApiResult<Option<chrono::NaiveDate>> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            kb_core::parse_date(s).map_err(|_| {
                ApiError::validation(format!("Invalid date {} (expected YYYY-MM-DD)", s), field)
            })
        })
        .transpose()
}
