//! Column REST API handlers

use crate::api::{input, ordering};
use crate::{
    ApiError, ApiResult, AppState, ColumnListResponse, ColumnResponse, CreateColumnRequest,
    DeleteResponse, ListColumnsQuery, MoveColumnRequest, RenumberRequest, UpdateColumnRequest,
};

use kb_core::{Column, ColumnDto};
use kb_db::{BoardRepository, ColumnRepository};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use log::info;

/// GET /api/columns?boardId=
pub async fn list_columns(
    State(state): State<AppState>,
    Query(query): Query<ListColumnsQuery>,
) -> ApiResult<Json<ColumnListResponse>> {
    let board_id = input::parse_id(&query.board_id, "boardId")?;

    let columns = ColumnRepository::find_by_board(&state.pool, board_id).await?;

    Ok(Json(ColumnListResponse {
        columns: columns.into_iter().map(ColumnDto::from).collect(),
    }))
}

/// POST /api/columns
pub async fn create_column(
    State(state): State<AppState>,
    Json(req): Json<CreateColumnRequest>,
) -> ApiResult<Json<ColumnResponse>> {
    let board_id = input::parse_id(&req.board_id, "board_id")?;
    let title = input::title(&req.title, &state.validation)?;

    BoardRepository::find_by_id(&state.pool, board_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Board", board_id))?;

    let last = ColumnRepository::max_position(&state.pool, board_id).await?;
    let position = ordering::new_item_position(&state, req.position, last, board_id)?;

    let mut column = Column::new(board_id, title, position);
    column.color = req.color.as_deref().map(input::sanitize_string);

    ColumnRepository::create(&state.pool, &column).await?;
    info!("Created column {} on board {} at {}", column.id, board_id, position);

    Ok(Json(ColumnResponse {
        column: column.into(),
    }))
}

/// PUT /api/columns/{id}
pub async fn update_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateColumnRequest>,
) -> ApiResult<Json<ColumnResponse>> {
    let column_id = input::parse_id(&id, "id")?;

    let mut column = ColumnRepository::find_by_id(&state.pool, column_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Column", column_id))?;

    if let Some(ref title) = req.title {
        column.title = input::title(title, &state.validation)?;
    }
    if let Some(ref color) = req.color {
        column.color = Some(input::sanitize_string(color)).filter(|c| !c.is_empty());
    }
    column.updated_at = Utc::now();

    if !ColumnRepository::update(&state.pool, &column).await? {
        return Err(ApiError::not_found("Column", column_id));
    }

    Ok(Json(ColumnResponse {
        column: column.into(),
    }))
}

/// DELETE /api/columns/{id}
///
/// Tasks of the column are deleted with it.
pub async fn delete_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let column_id = input::parse_id(&id, "id")?;

    if !ColumnRepository::delete(&state.pool, column_id).await? {
        return Err(ApiError::not_found("Column", column_id));
    }
    info!("Deleted column {}", column_id);

    Ok(Json(DeleteResponse {
        deleted_id: column_id.to_string(),
    }))
}

/// PUT /api/columns/{id}/position
pub async fn move_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveColumnRequest>,
) -> ApiResult<Json<ColumnResponse>> {
    let column_id = input::parse_id(&id, "id")?;
    let position = input::position(req.position, state.board.position_limit)?;

    let column = ColumnRepository::move_to(&state.pool, column_id, position, Utc::now()).await?;

    Ok(Json(ColumnResponse {
        column: column.into(),
    }))
}

/// POST /api/boards/{board_id}/columns/renumber
///
/// All keys are written in one transaction; an id outside the board fails
/// the whole request.
pub async fn renumber_columns(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
    Json(req): Json<RenumberRequest>,
) -> ApiResult<Json<ColumnListResponse>> {
    let board_id = input::parse_id(&board_id, "board_id")?;
    let positions = ordering::renumber_positions(&state, &req)?;

    let columns =
        ColumnRepository::renumber(&state.pool, board_id, &positions, Utc::now()).await?;

    Ok(Json(ColumnListResponse {
        columns: columns.into_iter().map(ColumnDto::from).collect(),
    }))
}
