use kb_core::Tag;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TagDto {
    pub id: String,
    pub project_id: String,
    pub category_id: String,
    pub name: String,
    pub color: Option<String>,
    pub created_at: i64,
}

impl From<Tag> for TagDto {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id.to_string(),
            project_id: t.project_id.to_string(),
            category_id: t.category_id.to_string(),
            name: t.name,
            color: t.color,
            created_at: t.created_at.timestamp_millis(),
        }
    }
}
