use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}
