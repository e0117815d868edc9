//! REST adapter for a board session running apart from the server.

use crate::{BoardError, BoardResult, BoardStore};

use kb_core::{Column, ColumnDto, CoreResult, Position, Task, TaskDto, TaskFilter, TaskFilterParams};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
struct ColumnListResponse {
    columns: Vec<ColumnDto>,
}

#[derive(Deserialize)]
struct ColumnResponse {
    column: ColumnDto,
}

#[derive(Deserialize)]
struct TaskListResponse {
    tasks: Vec<TaskDto>,
}

#[derive(Deserialize)]
struct TaskResponse {
    task: TaskDto,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Serialize)]
struct PositionEntry {
    id: String,
    position: f64,
}

#[derive(Serialize)]
struct RenumberRequest {
    positions: Vec<PositionEntry>,
}

impl RenumberRequest {
    fn new(positions: &[(Uuid, Position)]) -> Self {
        Self {
            positions: positions
                .iter()
                .map(|(id, position)| PositionEntry {
                    id: id.to_string(),
                    position: position.value(),
                })
                .collect(),
        }
    }
}

/// Store that talks to the board REST API
pub struct HttpStore {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpStore {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8000`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> BoardResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            BoardError::persistence(format!("invalid URL {}{}: {}", self.base_url, path, e))
        })?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    fn request(&self, method: Method, path: &str) -> BoardResult<RequestBuilder> {
        Ok(self.client.request(method, self.url(path, &[])?))
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> BoardResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl BoardStore for HttpStore {
    async fn list_columns(&self, board_id: Uuid) -> BoardResult<Vec<Column>> {
        let url = self.url("/api/columns", &[("boardId", board_id.to_string())])?;
        let response: ColumnListResponse = self.execute(self.client.get(url)).await?;

        Ok(response
            .columns
            .into_iter()
            .map(Column::try_from)
            .collect::<CoreResult<Vec<_>>>()?)
    }

    async fn list_tasks(&self, board_id: Uuid, filter: &TaskFilter) -> BoardResult<Vec<Task>> {
        let mut query = vec![("boardId", board_id.to_string())];
        query.extend(filter_query(&TaskFilterParams::from(filter)));

        let url = self.url("/api/tasks", &query)?;
        debug!("Fetching tasks from {}", url);
        let response: TaskListResponse = self.execute(self.client.get(url)).await?;

        Ok(response
            .tasks
            .into_iter()
            .map(Task::try_from)
            .collect::<CoreResult<Vec<_>>>()?)
    }

    async fn move_column(&self, column_id: Uuid, position: Position) -> BoardResult<Column> {
        #[derive(Serialize)]
        struct MoveColumnRequest {
            position: f64,
        }

        let req = self
            .request(Method::PUT, &format!("/api/columns/{}/position", column_id))?
            .json(&MoveColumnRequest {
                position: position.value(),
            });
        let response: ColumnResponse = self.execute(req).await?;

        Ok(Column::try_from(response.column)?)
    }

    async fn move_task(
        &self,
        task_id: Uuid,
        column_id: Uuid,
        position: Position,
    ) -> BoardResult<Task> {
        #[derive(Serialize)]
        struct MoveTaskRequest {
            column_id: String,
            position: f64,
        }

        let req = self
            .request(Method::PUT, &format!("/api/tasks/{}/position", task_id))?
            .json(&MoveTaskRequest {
                column_id: column_id.to_string(),
                position: position.value(),
            });
        let response: TaskResponse = self.execute(req).await?;

        Ok(Task::try_from(response.task)?)
    }

    async fn renumber_columns(
        &self,
        board_id: Uuid,
        positions: &[(Uuid, Position)],
    ) -> BoardResult<Vec<Column>> {
        let req = self
            .request(
                Method::POST,
                &format!("/api/boards/{}/columns/renumber", board_id),
            )?
            .json(&RenumberRequest::new(positions));
        let response: ColumnListResponse = self.execute(req).await?;

        Ok(response
            .columns
            .into_iter()
            .map(Column::try_from)
            .collect::<CoreResult<Vec<_>>>()?)
    }

    async fn renumber_tasks(
        &self,
        column_id: Uuid,
        positions: &[(Uuid, Position)],
    ) -> BoardResult<Vec<Task>> {
        let req = self
            .request(
                Method::POST,
                &format!("/api/columns/{}/tasks/renumber", column_id),
            )?
            .json(&RenumberRequest::new(positions));
        let response: TaskListResponse = self.execute(req).await?;

        Ok(response
            .tasks
            .into_iter()
            .map(Task::try_from)
            .collect::<CoreResult<Vec<_>>>()?)
    }
}

/// Query pairs for the filter's wire form, empty dimensions omitted
pub(crate) fn filter_query(params: &TaskFilterParams) -> Vec<(&'static str, String)> {
    [
        ("q", &params.q),
        ("prio", &params.prio),
        ("df", &params.df),
        ("dt", &params.dt),
        ("tagIds", &params.tag_ids),
        ("tagMode", &params.tag_mode),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.clone().map(|value| (key, value)))
    .collect()
}

fn api_error(status: StatusCode, body: &str) -> BoardError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => BoardError::api(envelope.error.code, envelope.error.message),
        Err(_) if body.trim().is_empty() => BoardError::api(status.as_str(), status.to_string()),
        Err(_) => BoardError::api(status.as_str(), body),
    }
}
