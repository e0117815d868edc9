use crate::api::input;
use crate::{ApiError, ApiResult, AppState, BoardViewResponse};

use kb_core::{ColumnDto, TaskDto, TaskFilter, TaskScope};
use kb_db::{BoardRepository, ColumnRepository, TaskRepository};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/boards/by-project/{project_id}
///
/// The project's default board, falling back to its oldest board.
pub async fn get_board_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<BoardViewResponse>> {
    let project_id = input::parse_id(&project_id, "project_id")?;

    let board = BoardRepository::find_default_for_project(&state.pool, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Board for project", project_id))?;

    let columns = ColumnRepository::find_by_board(&state.pool, board.id).await?;
    let tasks = TaskRepository::find_filtered(
        &state.pool,
        &TaskScope::board(board.id),
        &TaskFilter::default(),
    )
    .await?;

    Ok(Json(BoardViewResponse {
        board: board.into(),
        columns: columns.into_iter().map(ColumnDto::from).collect(),
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}
