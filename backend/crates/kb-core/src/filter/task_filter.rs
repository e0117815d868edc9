//! The active task filter as an immutable value.

use crate::{FilterClause, Priority, TagMode};

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text, priority, due-date range and tag constraints. An absent or empty
/// dimension places no constraint on tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    text: Option<String>,
    priorities: BTreeSet<Priority>,
    due_from: Option<NaiveDate>,
    due_to: Option<NaiveDate>,
    tag_ids: BTreeSet<Uuid>,
    tag_mode: TagMode,
}

impl TaskFilter {
    pub fn builder() -> TaskFilterBuilder {
        TaskFilterBuilder::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn priorities(&self) -> &BTreeSet<Priority> {
        &self.priorities
    }

    pub fn due_from(&self) -> Option<NaiveDate> {
        self.due_from
    }

    pub fn due_to(&self) -> Option<NaiveDate> {
        self.due_to
    }

    pub fn tag_ids(&self) -> &BTreeSet<Uuid> {
        &self.tag_ids
    }

    pub fn tag_mode(&self) -> TagMode {
        self.tag_mode
    }

    /// No dimension is active
    pub fn is_empty(&self) -> bool {
        self.clauses().is_empty()
    }

    /// One clause per active dimension, always in the same order:
    /// text, priority, due-from, due-to, tags.
    pub fn clauses(&self) -> Vec<FilterClause> {
        let mut clauses = Vec::new();

        if let Some(text) = &self.text {
            clauses.push(FilterClause::TitleContains(text.to_ascii_lowercase()));
        }
        if !self.priorities.is_empty() {
            clauses.push(FilterClause::PriorityIn(
                self.priorities.iter().copied().collect(),
            ));
        }
        if let Some(from) = self.due_from {
            clauses.push(FilterClause::DueOnOrAfter(from));
        }
        if let Some(to) = self.due_to {
            clauses.push(FilterClause::DueOnOrBefore(to));
        }
        if !self.tag_ids.is_empty() {
            let ids: Vec<Uuid> = self.tag_ids.iter().copied().collect();
            clauses.push(match self.tag_mode {
                TagMode::And => FilterClause::HasAllTags(ids),
                TagMode::Or => FilterClause::HasAnyTag(ids),
            });
        }

        clauses
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilterBuilder {
    filter: TaskFilter,
}

impl TaskFilterBuilder {
    /// Blank or whitespace-only text clears the text constraint
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        self.filter.text = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.filter.priorities = priorities.into_iter().collect();
        self
    }

    pub fn due_from(mut self, date: Option<NaiveDate>) -> Self {
        self.filter.due_from = date;
        self
    }

    pub fn due_to(mut self, date: Option<NaiveDate>) -> Self {
        self.filter.due_to = date;
        self
    }

    pub fn tag_ids(mut self, tag_ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.filter.tag_ids = tag_ids.into_iter().collect();
        self
    }

    pub fn tag_mode(mut self, mode: TagMode) -> Self {
        self.filter.tag_mode = mode;
        self
    }

    pub fn build(self) -> TaskFilter {
        self.filter
    }
}
