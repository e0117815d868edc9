use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,

    /// Name of the default board created alongside the project
    #[serde(default)]
    pub board_name: Option<String>,
}
