use serde::Deserialize;

/// Absent fields are left unchanged; an empty string clears an optional
/// text, id or date field
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// true archives the task, false restores it
    #[serde(default)]
    pub archived: Option<bool>,
}
