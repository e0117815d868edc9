use crate::{Priority, Task};

use chrono::NaiveDate;
use uuid::Uuid;

/// A single named constraint compiled from a [`TaskFilter`](crate::TaskFilter).
///
/// The in-memory evaluator and the SQL compiler both consume this list,
/// which keeps the two result sets identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// ASCII case-folded needle matched as a substring of the title
    TitleContains(String),
    PriorityIn(Vec<Priority>),
    /// Undated tasks pass
    DueOnOrAfter(NaiveDate),
    /// Undated tasks pass
    DueOnOrBefore(NaiveDate),
    HasAnyTag(Vec<Uuid>),
    HasAllTags(Vec<Uuid>),
}

impl FilterClause {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TitleContains(_) => "title_contains",
            Self::PriorityIn(_) => "priority_in",
            Self::DueOnOrAfter(_) => "due_on_or_after",
            Self::DueOnOrBefore(_) => "due_on_or_before",
            Self::HasAnyTag(_) => "has_any_tag",
            Self::HasAllTags(_) => "has_all_tags",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::TitleContains(needle) => task.title.to_ascii_lowercase().contains(needle),
            Self::PriorityIn(priorities) => priorities.contains(&task.priority),
            Self::DueOnOrAfter(from) => task.due_date.is_none_or(|due| due >= *from),
            Self::DueOnOrBefore(to) => task.due_date.is_none_or(|due| due <= *to),
            Self::HasAnyTag(ids) => ids.iter().any(|id| task.tags.contains(id)),
            Self::HasAllTags(ids) => ids.iter().all(|id| task.tags.contains(id)),
        }
    }
}
