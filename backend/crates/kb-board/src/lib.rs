pub mod board_mutation_service;
pub mod board_session;
pub mod error;
pub mod reconciliation_cache;
pub mod signature;
pub mod store;

#[cfg(test)]
mod tests;

pub use board_mutation_service::BoardMutationService;
pub use board_session::{BoardSession, RefreshOutcome};
pub use error::{BoardError, Result as BoardResult};
pub use reconciliation_cache::{
    ItemKind, OptimisticMove, Placement, ReconcileOutcome, ReconciliationCache,
};
pub use signature::Signature;
pub use store::BoardStore;
pub use store::http_store::HttpStore;
pub use store::sqlite_store::SqliteStore;
