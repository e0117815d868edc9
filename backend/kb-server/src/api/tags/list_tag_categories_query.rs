use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListTagCategoriesQuery {
    #[serde(rename = "projectId")]
    pub project_id: String,
}
