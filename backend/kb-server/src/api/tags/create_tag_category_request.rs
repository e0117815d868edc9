use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTagCategoryRequest {
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Listed after the existing categories when absent
    #[serde(default)]
    pub position: Option<i64>,
}
