use crate::{Position, Positioned, Priority};

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task card. Its scope is the column it currently sits in; the column
/// does not own the task's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub board_id: Uuid,
    pub column_id: Uuid,

    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub position: Position,

    pub assignee_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,

    pub tags: BTreeSet<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(
        project_id: Uuid,
        board_id: Uuid,
        column_id: Uuid,
        title: String,
        position: Position,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            board_id,
            column_id,
            title,
            description: None,
            priority: Priority::default(),
            position,
            assignee_id: None,
            start_date: None,
            due_date: None,
            tags: BTreeSet::new(),
            created_at: now,
            updated_at: now,
            archived_at: None,
        }
    }

    /// Archived tasks are kept but hidden from every default listing
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

impl Positioned for Task {
    fn id(&self) -> Uuid {
        self.id
    }

    fn scope_id(&self) -> Uuid {
        self.column_id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn modified_marker(&self) -> i64 {
        self.updated_at.timestamp_millis()
    }

    fn place(&mut self, scope_id: Uuid, position: Position) {
        self.column_id = scope_id;
        self.position = position;
    }
}
