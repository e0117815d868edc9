use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Groups tags in filter UIs. Has no effect on filtering itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCategory {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub position: i64,
}

impl TagCategory {
    pub fn new(project_id: Uuid, name: String, position: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            name,
            color: None,
            position,
        }
    }
}
