use serde::Deserialize;

/// Absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateColumnRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}
