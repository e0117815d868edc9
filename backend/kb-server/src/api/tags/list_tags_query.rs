use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListTagsQuery {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(default, rename = "categoryId")]
    pub category_id: Option<String>,
}
