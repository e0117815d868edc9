use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateColumnRequest {
    pub board_id: String,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Appended after the last column when absent
    #[serde(default)]
    pub position: Option<f64>,
}
