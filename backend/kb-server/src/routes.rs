use crate::{
    AppState, add_task_tag, count_tasks, create_column, create_project, create_tag,
    create_tag_category, create_task, delete_column, delete_task, get_board_for_project,
    get_project, get_task, health, list_columns, list_projects, list_tag_categories, list_tags,
    list_task_tags, list_tasks, move_column, move_task, remove_task_tag, renumber_columns,
    renumber_tasks, task_tag_map, update_column, update_task,
};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Projects and boards
        .route(
            "/api/projects",
            get(list_projects).post(create_project),
        )
        .route("/api/projects/{id}", get(get_project))
        .route(
            "/api/boards/by-project/{project_id}",
            get(get_board_for_project),
        )
        // Columns
        .route(
            "/api/columns",
            get(list_columns).post(create_column),
        )
        .route(
            "/api/columns/{id}",
            put(update_column).delete(delete_column),
        )
        .route("/api/columns/{id}/position", put(move_column))
        .route(
            "/api/boards/{board_id}/columns/renumber",
            post(renumber_columns),
        )
        // Tasks
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/count", get(count_tasks))
        .route("/api/tasks/tags", get(task_tag_map))
        .route(
            "/api/tasks/{id}",
            get(get_task)
                .put(update_task)
                .delete(delete_task),
        )
        .route("/api/tasks/{id}/position", put(move_task))
        .route(
            "/api/columns/{column_id}/tasks/renumber",
            post(renumber_tasks),
        )
        .route(
            "/api/tasks/{id}/tags",
            get(list_task_tags).post(add_task_tag),
        )
        .route(
            "/api/tasks/{id}/tags/{tag_id}",
            delete(remove_task_tag),
        )
        // Tags
        .route("/api/tags", get(list_tags).post(create_tag))
        .route(
            "/api/tag-categories",
            get(list_tag_categories).post(create_tag_category),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
