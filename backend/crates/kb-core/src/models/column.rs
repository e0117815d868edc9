use crate::{Position, Positioned};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A column of a board. Its scope is the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: Uuid,
    pub board_id: Uuid,
    pub title: String,
    pub color: Option<String>,
    pub position: Position,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn new(board_id: Uuid, title: String, position: Position) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            title,
            color: None,
            position,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Positioned for Column {
    fn id(&self) -> Uuid {
        self.id
    }

    fn scope_id(&self) -> Uuid {
        self.board_id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn modified_marker(&self) -> i64 {
        self.updated_at.timestamp_millis()
    }

    fn place(&mut self, scope_id: Uuid, position: Position) {
        self.board_id = scope_id;
        self.position = position;
    }
}
