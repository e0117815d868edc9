use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A board belongs to a project and owns an ordered set of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    /// The board opened when a project is selected
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl Board {
    pub fn new(project_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            name,
            is_default: false,
            created_at: Utc::now(),
        }
    }

    pub fn new_default(project_id: Uuid, name: String) -> Self {
        let mut board = Self::new(project_id, name);
        board.is_default = true;
        board
    }
}
