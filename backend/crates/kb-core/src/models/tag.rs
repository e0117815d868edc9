use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tag belongs to exactly one category; tasks hold tags many-to-many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub project_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(project_id: Uuid, category_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            category_id,
            name,
            color: None,
            created_at: Utc::now(),
        }
    }
}
