use kb_core::Board;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BoardDto {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub is_default: bool,
    pub created_at: i64,
}

impl From<Board> for BoardDto {
    fn from(b: Board) -> Self {
        Self {
            id: b.id.to_string(),
            project_id: b.project_id.to_string(),
            name: b.name,
            is_default: b.is_default,
            created_at: b.created_at.timestamp_millis(),
        }
    }
}
