//! Project REST API handlers

use crate::api::input;
use crate::{
    ApiError, ApiResult, AppState, CreateProjectRequest, ProjectDto, ProjectListResponse,
    ProjectResponse,
};

use kb_core::{Board, Project};
use kb_db::{BoardRepository, ProjectRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use log::info;

const DEFAULT_BOARD_NAME: &str = "Main";

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let projects = ProjectRepository::find_all(&state.pool).await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = input::parse_id(&id, "id")?;

    let project = ProjectRepository::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project", project_id))?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}

/// POST /api/projects
///
/// Creates the project together with its default board.
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let name = input::sanitize_string(&req.name);
    if name.is_empty() {
        return Err(ApiError::validation("Project name cannot be empty", "name"));
    }
    let board_name = req
        .board_name
        .as_deref()
        .map(input::sanitize_string)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_BOARD_NAME.to_string());

    let project = Project::new(name);
    let board = Board::new_default(project.id, board_name);

    let mut tx = state.pool.begin().await?;
    ProjectRepository::create(&mut *tx, &project).await?;
    BoardRepository::create(&mut *tx, &board).await?;
    tx.commit().await?;

    info!("Created project {} with default board {}", project.id, board.id);

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}
