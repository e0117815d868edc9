use serde::Deserialize;

/// At least one of the two ids is required
#[derive(Debug, Deserialize)]
pub struct TagMapQuery {
    #[serde(default, rename = "boardId")]
    pub board_id: Option<String>,
    #[serde(default, rename = "projectId")]
    pub project_id: Option<String>,
}
