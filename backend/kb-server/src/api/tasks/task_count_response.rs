use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskCountResponse {
    pub count: i64,
}
