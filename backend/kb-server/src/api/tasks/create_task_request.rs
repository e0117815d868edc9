use serde::Deserialize;

/// Request body for creating a task. Board and project follow the column.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub column_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub start_date: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    /// Appended after the last task of the column when absent
    #[serde(default)]
    pub position: Option<f64>,
}
