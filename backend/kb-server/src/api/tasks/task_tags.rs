//! Tag links of a single task

use crate::api::input;
use crate::api::tasks::tasks::check_tag;
use crate::{AddTaskTagRequest, ApiError, ApiResult, AppState, TagDto, TagListResponse};

use kb_core::Task;
use kb_db::{TagRepository, TaskRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use log::debug;
use uuid::Uuid;

/// GET /api/tasks/{id}/tags
pub async fn list_task_tags(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TagListResponse>> {
    let task = find_task(&state, &id).await?;
    tag_list(&state, task.id).await
}

/// POST /api/tasks/{id}/tags
///
/// Linking a tag twice is not an error.
pub async fn add_task_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddTaskTagRequest>,
) -> ApiResult<Json<TagListResponse>> {
    let mut task = find_task(&state, &id).await?;
    let tag_id = input::parse_id(&req.tag_id, "tag_id")?;
    check_tag(&state, tag_id, task.project_id).await?;

    let mut tx = state.pool.begin().await?;
    if TaskRepository::add_tag(&mut *tx, task.id, tag_id).await? {
        touch(&mut tx, &mut task).await?;
    }
    tx.commit().await?;
    debug!("Tag {} linked to task {}", tag_id, task.id);

    tag_list(&state, task.id).await
}

/// DELETE /api/tasks/{id}/tags/{tag_id}
pub async fn remove_task_tag(
    State(state): State<AppState>,
    Path((id, tag_id)): Path<(String, String)>,
) -> ApiResult<Json<TagListResponse>> {
    let mut task = find_task(&state, &id).await?;
    let tag_id = input::parse_id(&tag_id, "tag_id")?;

    let mut tx = state.pool.begin().await?;
    if !TaskRepository::remove_tag(&mut *tx, task.id, tag_id).await? {
        return Err(ApiError::not_found("Tag link", tag_id));
    }
    touch(&mut tx, &mut task).await?;
    tx.commit().await?;
    debug!("Tag {} unlinked from task {}", tag_id, task.id);

    tag_list(&state, task.id).await
}

async fn find_task(state: &AppState, raw_id: &str) -> ApiResult<Task> {
    let task_id = input::parse_id(raw_id, "id")?;

    TaskRepository::find_by_id(&state.pool, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task", task_id))
}

/// A tag change is a change of the task, so listings see a new marker
async fn touch(tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>, task: &mut Task) -> ApiResult<()> {
    task.updated_at = Utc::now();
    TaskRepository::update(&mut **tx, task).await?;
    Ok(())
}

async fn tag_list(state: &AppState, task_id: Uuid) -> ApiResult<Json<TagListResponse>> {
    let tags = TagRepository::find_by_task(&state.pool, task_id).await?;

    Ok(Json(TagListResponse {
        tags: tags.into_iter().map(TagDto::from).collect(),
    }))
}
