use kb_core::TagCategory;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagCategoryDto {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub color: Option<String>,
    pub position: i64,
}

impl From<TagCategory> for TagCategoryDto {
    fn from(c: TagCategory) -> Self {
        Self {
            id: c.id.to_string(),
            project_id: c.project_id.to_string(),
            name: c.name,
            color: c.color,
            position: c.position,
        }
    }
}
