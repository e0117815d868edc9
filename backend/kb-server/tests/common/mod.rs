#![allow(dead_code)]

//! Test infrastructure for kb-server API tests

use kb_config::Config;
use kb_core::{Board, Column, Position, Project, Tag, TagCategory, Task};
use kb_db::{
    BoardRepository, ColumnRepository, ProjectRepository, TagCategoryRepository, TagRepository,
    TaskRepository,
};
use kb_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// In-memory database with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    kb_db::connect_in_memory()
        .await
        .expect("Failed to create test database")
}

/// AppState over a fresh database and default configuration
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await, &Config::default())
}

pub fn pos(value: f64) -> Position {
    Position::new(value).unwrap()
}

/// A project with one default board and no columns
pub struct Fixture {
    pub state: AppState,
    pub project: Project,
    pub board: Board,
}

impl Fixture {
    pub async fn new() -> Self {
        let state = create_test_app_state().await;

        let project = Project::new("Test Project".to_string());
        ProjectRepository::create(&state.pool, &project).await.unwrap();
        let board = Board::new_default(project.id, "Main".to_string());
        BoardRepository::create(&state.pool, &board).await.unwrap();

        Self {
            state,
            project,
            board,
        }
    }

    pub fn app(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.pool
    }

    pub async fn column(&self, title: &str, position: f64) -> Column {
        let column = Column::new(self.board.id, title.to_string(), pos(position));
        ColumnRepository::create(self.pool(), &column).await.unwrap();
        column
    }

    pub async fn task(&self, column: &Column, title: &str, position: f64) -> Task {
        let task = Task::new(
            self.project.id,
            self.board.id,
            column.id,
            title.to_string(),
            pos(position),
        );
        TaskRepository::create(self.pool(), &task).await.unwrap();
        task
    }

    /// Store a task built by the caller, linking its tags
    pub async fn store_task(&self, task: &Task) {
        TaskRepository::create(self.pool(), task).await.unwrap();
        for tag_id in &task.tags {
            TaskRepository::add_tag(self.pool(), task.id, *tag_id)
                .await
                .unwrap();
        }
    }

    pub async fn category(&self, name: &str) -> TagCategory {
        let category = TagCategory::new(self.project.id, name.to_string(), 0);
        TagCategoryRepository::create(self.pool(), &category)
            .await
            .unwrap();
        category
    }

    pub async fn tag(&self, category: &TagCategory, name: &str) -> Tag {
        let tag = Tag::new(self.project.id, category.id, name.to_string());
        TagRepository::create(self.pool(), &tag).await.unwrap();
        tag
    }
}

/// Send one request through the router and decode the JSON body
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

/// Ids of a JSON array of records, in order
pub fn ids(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
