use kb_config::{BoardConfig, Config, ValidationConfig};
use kb_core::PositionAllocator;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub board: BoardConfig,
    pub validation: ValidationConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            board: config.board.clone(),
            validation: config.validation.clone(),
        }
    }

    pub fn allocator(&self) -> PositionAllocator {
        self.board.allocator()
    }
}
