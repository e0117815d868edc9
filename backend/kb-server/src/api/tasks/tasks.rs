//! Task REST API handlers

use crate::api::{input, ordering};
use crate::{
    ApiError, ApiResult, AppState, CreateTaskRequest, DeleteResponse, ListTasksQuery,
    MoveTaskRequest, RenumberRequest, TagDto, TagMapQuery, TaskCountResponse, TaskListResponse,
    TaskResponse, TaskTagMapResponse, UpdateTaskRequest,
};

use kb_core::{Task, TaskDto};
use kb_db::{BoardRepository, ColumnRepository, TagRepository, TaskRepository};

use std::collections::BTreeSet;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use uuid::Uuid;

/// GET /api/tasks
///
/// Scope keys `projectId`, `boardId`, `columnId`, `assigneeId` plus the
/// filter keys `q`, `prio`, `df`, `dt`, `tagIds`, `tagMode`. Archived
/// tasks are never listed.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let scope = query.scope()?;
    let filter = query.filter()?;

    let tasks = TaskRepository::find_filtered(&state.pool, &scope, &filter).await?;
    debug!("Listed {} tasks for {:?}", tasks.len(), scope);

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}

/// GET /api/tasks/count
pub async fn count_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<TaskCountResponse>> {
    let scope = query.scope()?;
    let filter = query.filter()?;

    let count = TaskRepository::count_filtered(&state.pool, &scope, &filter).await?;

    Ok(Json(TaskCountResponse { count }))
}

/// GET /api/tasks/tags?boardId=|projectId=
pub async fn task_tag_map(
    State(state): State<AppState>,
    Query(query): Query<TagMapQuery>,
) -> ApiResult<Json<TaskTagMapResponse>> {
    let board_id = input::parse_optional_id(query.board_id.as_deref(), "boardId")?;
    let project_id = input::parse_optional_id(query.project_id.as_deref(), "projectId")?;
    if board_id.is_none() && project_id.is_none() {
        return Err(ApiError::bad_request("One of boardId or projectId is required"));
    }

    let map = TagRepository::find_task_tag_map(&state.pool, board_id, project_id).await?;

    Ok(Json(TaskTagMapResponse {
        tags: map
            .into_iter()
            .map(|(task_id, tags)| {
                (
                    task_id.to_string(),
                    tags.into_iter().map(TagDto::from).collect(),
                )
            })
            .collect(),
    }))
}

/// GET /api/tasks/{id}
///
/// Archived tasks can still be fetched by id.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = input::parse_id(&id, "id")?;

    let task = TaskRepository::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task", task_id))?;

    Ok(Json(TaskResponse { task: task.into() }))
}

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let column_id = input::parse_id(&req.column_id, "column_id")?;
    let title = input::title(&req.title, &state.validation)?;
    let description = input::description(req.description.as_deref(), &state.validation)?;
    let priority = req
        .priority
        .map(input::priority)
        .transpose()?
        .unwrap_or_default();
    let assignee_id = input::parse_optional_id(req.assignee_id.as_deref(), "assignee_id")?;
    let start_date = input::date(req.start_date.as_deref(), "start_date")?;
    let due_date = input::date(req.due_date.as_deref(), "due_date")?;
    check_date_range(start_date, due_date)?;

    let column = ColumnRepository::find_by_id(&state.pool, column_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Column", column_id))?;
    let board = BoardRepository::find_by_id(&state.pool, column.board_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Board", column.board_id))?;

    let mut tag_ids = BTreeSet::new();
    for raw in &req.tag_ids {
        let tag_id = input::parse_id(raw, "tag_ids")?;
        check_tag(&state, tag_id, board.project_id).await?;
        tag_ids.insert(tag_id);
    }

    let last = TaskRepository::max_position(&state.pool, column_id).await?;
    let position = ordering::new_item_position(&state, req.position, last, column_id)?;

    let mut task = Task::new(board.project_id, board.id, column_id, title, position);
    task.description = description;
    task.priority = priority;
    task.assignee_id = assignee_id;
    task.start_date = start_date;
    task.due_date = due_date;
    task.tags = tag_ids;

    let mut tx = state.pool.begin().await?;
    TaskRepository::create(&mut *tx, &task).await?;
    for tag_id in &task.tags {
        TaskRepository::add_tag(&mut *tx, task.id, *tag_id).await?;
    }
    tx.commit().await?;

    info!("Created task {} in column {} at {}", task.id, column_id, position);

    Ok(Json(TaskResponse { task: task.into() }))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = input::parse_id(&id, "id")?;

    let mut task = TaskRepository::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task", task_id))?;

    if let Some(title) = req.title.as_deref() {
        task.title = input::title(title, &state.validation)?;
    }
    if let Some(description) = req.description.as_deref() {
        task.description = input::description(Some(description), &state.validation)?;
    }
    if let Some(priority) = req.priority {
        task.priority = input::priority(priority)?;
    }
    if let Some(assignee_id) = req.assignee_id.as_deref() {
        task.assignee_id = input::parse_optional_id(Some(assignee_id), "assignee_id")?;
    }
    if let Some(start_date) = req.start_date.as_deref() {
        task.start_date = input::date(Some(start_date), "start_date")?;
    }
    if let Some(due_date) = req.due_date.as_deref() {
        task.due_date = input::date(Some(due_date), "due_date")?;
    }
    check_date_range(task.start_date, task.due_date)?;

    let now = Utc::now();
    match req.archived {
        Some(true) if task.archived_at.is_none() => task.archived_at = Some(now),
        Some(false) => task.archived_at = None,
        _ => {}
    }
    task.updated_at = now;

    if !TaskRepository::update(&state.pool, &task).await? {
        return Err(ApiError::not_found("Task", task_id));
    }

    Ok(Json(TaskResponse { task: task.into() }))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = input::parse_id(&id, "id")?;

    if !TaskRepository::delete(&state.pool, task_id).await? {
        return Err(ApiError::not_found("Task", task_id));
    }
    info!("Deleted task {}", task_id);

    Ok(Json(DeleteResponse {
        deleted_id: task_id.to_string(),
    }))
}

/// PUT /api/tasks/{id}/position
///
/// Moves a task within its column or to another column of the same board.
pub async fn move_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = input::parse_id(&id, "id")?;
    let column_id = input::parse_id(&req.column_id, "column_id")?;
    let position = input::position(req.position, state.board.position_limit)?;

    let task = TaskRepository::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task", task_id))?;

    if task.column_id != column_id {
        let column = ColumnRepository::find_by_id(&state.pool, column_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Column", column_id))?;
        if column.board_id != task.board_id {
            return Err(ApiError::validation(
                format!("Column {} is not on the task's board", column_id),
                "column_id",
            ));
        }
    }

    let task =
        TaskRepository::move_to(&state.pool, task_id, column_id, position, Utc::now()).await?;

    Ok(Json(TaskResponse { task: task.into() }))
}

/// POST /api/columns/{column_id}/tasks/renumber
///
/// Every listed task ends up in the column with its new key, all in one
/// transaction. Tasks must already be on the column's board.
pub async fn renumber_tasks(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    Json(req): Json<RenumberRequest>,
) -> ApiResult<Json<TaskListResponse>> {
    let column_id = input::parse_id(&column_id, "column_id")?;
    let positions = ordering::renumber_positions(&state, &req)?;

    let column = ColumnRepository::find_by_id(&state.pool, column_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Column", column_id))?;

    for (task_id, _) in &positions {
        let task = TaskRepository::find_by_id(&state.pool, *task_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Task", task_id))?;
        if task.board_id != column.board_id {
            return Err(ApiError::validation(
                format!("Task {} is not on the column's board", task_id),
                "positions",
            ));
        }
    }

    let tasks = TaskRepository::renumber(&state.pool, column_id, &positions, Utc::now()).await?;

    Ok(Json(TaskListResponse {
        tasks: tasks
            .into_iter()
            .filter(|task| !task.is_archived())
            .map(TaskDto::from)
            .collect(),
    }))
}

#[track_caller]
fn check_date_range(start: Option<NaiveDate>, due: Option<NaiveDate>) -> ApiResult<()> {
    if let (Some(start), Some(due)) = (start, due)
        && start > due
    {
        return Err(ApiError::validation(
            format!("start_date {} is after due_date {}", start, due),
            "start_date",
        ));
    }
    Ok(())
}

/// The tag must exist and belong to the task's project
pub(crate) async fn check_tag(state: &AppState, tag_id: Uuid, project_id: Uuid) -> ApiResult<()> {
    let tag = TagRepository::find_by_id(&state.pool, tag_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Tag", tag_id))?;

    if tag.project_id != project_id {
        return Err(ApiError::validation(
            format!("Tag {} belongs to another project", tag_id),
            "tag_id",
        ));
    }
    Ok(())
}
