//! Query-string form of a [`TaskFilter`].
//!
//! Lists are comma-joined; `tagMode` is `and` or `or` and defaults to `or`
//! when absent.

use crate::models::column_dto::parse_uuid;
use crate::models::task_dto::parse_date;
use crate::{CoreResult, Priority, TagMode, TaskFilter};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Comma-joined priorities, e.g. `2,4`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
    /// Due-date lower bound (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub df: Option<String>,
    /// Due-date upper bound (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<String>,
    /// Comma-joined tag UUIDs
    #[serde(
        default,
        rename = "tagIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag_ids: Option<String>,
    #[serde(
        default,
        rename = "tagMode",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag_mode: Option<String>,
}

impl TaskFilterParams {
    /// Validate and convert into a typed filter
    #[track_caller]
    pub fn into_filter(self) -> CoreResult<TaskFilter> {
        let priorities = split_list(self.prio.as_deref())
            .map(Priority::from_str)
            .collect::<CoreResult<Vec<_>>>()?;

        let tag_ids = split_list(self.tag_ids.as_deref())
            .map(parse_uuid)
            .collect::<CoreResult<Vec<_>>>()?;

        let tag_mode = match non_blank(self.tag_mode.as_deref()) {
            Some(mode) => TagMode::from_str(mode)?,
            None => TagMode::default(),
        };

        let due_from = non_blank(self.df.as_deref()).map(parse_date).transpose()?;
        let due_to = non_blank(self.dt.as_deref()).map(parse_date).transpose()?;

        Ok(TaskFilter::builder()
            .text(self.q.unwrap_or_default())
            .priorities(priorities)
            .due_from(due_from)
            .due_to(due_to)
            .tag_ids(tag_ids)
            .tag_mode(tag_mode)
            .build())
    }
}

impl From<&TaskFilter> for TaskFilterParams {
    fn from(filter: &TaskFilter) -> Self {
        let join = |items: Vec<String>| (!items.is_empty()).then(|| items.join(","));

        Self {
            q: filter.text().map(str::to_string),
            prio: join(filter.priorities().iter().map(|p| p.to_string()).collect()),
            df: filter.due_from().map(|d| d.to_string()),
            dt: filter.due_to().map(|d| d.to_string()),
            tag_ids: join(filter.tag_ids().iter().map(|id| id.to_string()).collect()),
            tag_mode: (filter.tag_mode() != TagMode::Or)
                .then(|| filter.tag_mode().as_str().to_string()),
        }
    }
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
