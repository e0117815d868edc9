use crate::{BoardResult, BoardStore, ItemKind, ReconciliationCache};

use kb_core::{MovePlan, Position, PositionAllocator};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};
use uuid::Uuid;

/// Runs one reorder end to end: plan against the optimistic view, apply it
/// to the cache, persist it, then confirm or (optionally) roll back.
///
/// The cache lock is only taken between awaits.
pub struct BoardMutationService<S> {
    store: Arc<S>,
    allocator: PositionAllocator,
    rollback_on_failure: bool,
}

impl<S: BoardStore> BoardMutationService<S> {
    pub fn new(store: Arc<S>, allocator: PositionAllocator, rollback_on_failure: bool) -> Self {
        Self {
            store,
            allocator,
            rollback_on_failure,
        }
    }

    pub fn allocator(&self) -> &PositionAllocator {
        &self.allocator
    }

    pub fn rollback_on_failure(&self) -> bool {
        self.rollback_on_failure
    }

    /// Move an item to `target_index` of `target_scope` and return its key.
    ///
    /// On a persistence failure the error is returned. Without rollback the
    /// optimistic state stays visible until the next refresh replaces it.
    pub async fn reorder(
        &self,
        cache: &Mutex<ReconciliationCache>,
        kind: ItemKind,
        item_id: Uuid,
        target_scope: Uuid,
        target_index: usize,
    ) -> BoardResult<Position> {
        let (plan, optimistic) = {
            let mut cache = lock(cache);
            let plan = cache.plan_move(&self.allocator, kind, item_id, target_scope, target_index)?;
            if plan.is_noop() {
                debug!("Reorder of {} {} is a no-op", kind, item_id);
                return Ok(plan.position);
            }
            let optimistic = cache.apply_plan(kind, &plan)?;
            (plan, optimistic)
        };

        match self.persist(kind, &plan).await {
            Ok(()) => {
                lock(cache).confirm(&optimistic);
                Ok(plan.position)
            }
            Err(e) => {
                warn!("Persisting {} move of {} failed: {}", kind, item_id, e);
                let mut cache = lock(cache);
                if !self.rollback_on_failure {
                    cache.abandon(&optimistic);
                } else if let Err(restore_err) = cache.rollback(&optimistic) {
                    warn!(
                        "Rolling back move #{} failed: {}",
                        optimistic.generation, restore_err
                    );
                    cache.abandon(&optimistic);
                }
                Err(e)
            }
        }
    }

    async fn persist(&self, kind: ItemKind, plan: &MovePlan) -> BoardResult<()> {
        match (kind, plan.is_renumbered()) {
            (ItemKind::Column, false) => {
                self.store.move_column(plan.item_id, plan.position).await?;
            }
            (ItemKind::Column, true) => {
                self.store
                    .renumber_columns(plan.to_scope, &plan.renumbered)
                    .await?;
            }
            (ItemKind::Task, false) => {
                self.store
                    .move_task(plan.item_id, plan.to_scope, plan.position)
                    .await?;
            }
            (ItemKind::Task, true) => {
                self.store
                    .renumber_tasks(plan.to_scope, &plan.renumbered)
                    .await?;
            }
        }
        Ok(())
    }
}

/// Poisoning is ignored; no cache operation leaves it half-updated.
pub(crate) fn lock(cache: &Mutex<ReconciliationCache>) -> MutexGuard<'_, ReconciliationCache> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}
