use crate::Task;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which tasks a listing looks at before the filter applies.
/// Unset ids place no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskScope {
    pub project_id: Option<Uuid>,
    pub board_id: Option<Uuid>,
    pub column_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
}

impl TaskScope {
    pub fn project(project_id: Uuid) -> Self {
        Self {
            project_id: Some(project_id),
            ..Default::default()
        }
    }

    pub fn board(board_id: Uuid) -> Self {
        Self {
            board_id: Some(board_id),
            ..Default::default()
        }
    }

    pub fn column(column_id: Uuid) -> Self {
        Self {
            column_id: Some(column_id),
            ..Default::default()
        }
    }

    pub fn with_assignee(mut self, assignee_id: Uuid) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    pub fn contains(&self, task: &Task) -> bool {
        self.project_id.is_none_or(|id| task.project_id == id)
            && self.board_id.is_none_or(|id| task.board_id == id)
            && self.column_id.is_none_or(|id| task.column_id == id)
            && self.assignee_id.is_none_or(|id| task.assignee_id == Some(id))
    }
}
