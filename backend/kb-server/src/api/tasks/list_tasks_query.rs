use crate::{ApiError, ApiResult};
use crate::api::input;

use kb_core::{TaskFilter, TaskFilterParams, TaskScope};

use serde::Deserialize;

/// Scope keys plus the filter's query-string form
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default, rename = "projectId")]
    pub project_id: Option<String>,
    #[serde(default, rename = "boardId")]
    pub board_id: Option<String>,
    #[serde(default, rename = "columnId")]
    pub column_id: Option<String>,
    #[serde(default, rename = "assigneeId")]
    pub assignee_id: Option<String>,
    #[serde(flatten)]
    pub filter: TaskFilterParams,
}

impl ListTasksQuery {
    #[track_caller]
    pub fn scope(&self) -> ApiResult<TaskScope> {
        let scope = TaskScope {
            project_id: input::parse_optional_id(self.project_id.as_deref(), "projectId")?,
            board_id: input::parse_optional_id(self.board_id.as_deref(), "boardId")?,
            column_id: input::parse_optional_id(self.column_id.as_deref(), "columnId")?,
            assignee_id: input::parse_optional_id(self.assignee_id.as_deref(), "assigneeId")?,
        };

        if scope.project_id.is_none() && scope.board_id.is_none() && scope.column_id.is_none() {
            return Err(ApiError::bad_request(
                "One of projectId, boardId or columnId is required",
            ));
        }

        Ok(scope)
    }

    #[track_caller]
    pub fn filter(self) -> ApiResult<TaskFilter> {
        Ok(self.filter.into_filter()?)
    }
}
