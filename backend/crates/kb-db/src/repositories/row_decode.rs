//! Conversions from stored column values back into domain values.

use crate::{DbError, Result};

use kb_core::{Position, Priority, parse_date};

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(table: &'static str, field: &str, value: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::decode(table, format!("Invalid UUID in {}: {}", field, e)))
}

#[track_caller]
pub(crate) fn optional_uuid(
    table: &'static str,
    field: &str,
    value: Option<&str>,
) -> Result<Option<Uuid>> {
    value.map(|v| uuid(table, field, v)).transpose()
}

#[track_caller]
pub(crate) fn timestamp(table: &'static str, field: &str, millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::decode(table, format!("Invalid timestamp in {}", field)))
}

#[track_caller]
pub(crate) fn position(table: &'static str, value: f64) -> Result<Position> {
    Position::new(value).map_err(|e| DbError::decode(table, e.to_string()))
}

#[track_caller]
pub(crate) fn priority(table: &'static str, value: i64) -> Result<Priority> {
    Priority::new(value).map_err(|e| DbError::decode(table, e.to_string()))
}

#[track_caller]
pub(crate) fn date(table: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|v| parse_date(v).map_err(|e| DbError::decode(table, e.to_string())))
        .transpose()
}

/// Comma-joined ids from `group_concat`
#[track_caller]
pub(crate) fn uuid_list(
    table: &'static str,
    field: &str,
    value: Option<&str>,
) -> Result<Vec<Uuid>> {
    value
        .unwrap_or_default()
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| uuid(table, field, s))
        .collect()
}
