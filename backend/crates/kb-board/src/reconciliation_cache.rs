//! Client mirror of one open board.
//!
//! Optimistic moves land here before the store confirms them. Authoritative
//! listings are accepted only when their content signature differs from the
//! last listing accepted, so a response to a fetch issued before a move
//! cannot put the pre-move state back.

use crate::Signature;

use kb_core::{
    Column, CoreError, CoreResult, MovePlan, OrderedCollection, Position, PositionAllocator,
    Positioned, Task,
};

use std::collections::HashMap;
use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Column,
    Task,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => write!(f, "column"),
            Self::Task => write!(f, "task"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Same content as the last accepted listing; payload dropped
    Unchanged,
    /// Working set replaced by the listing
    Replaced,
}

/// Scope and key of one item at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub item_id: Uuid,
    pub scope_id: Uuid,
    pub position: Position,
}

/// One optimistic move as applied to the cache
#[derive(Debug, Clone, PartialEq)]
pub struct OptimisticMove {
    pub kind: ItemKind,
    pub generation: u64,
    /// Placements before the move, one per touched item
    pub previous: Vec<Placement>,
    pub applied: Vec<Placement>,
}

impl OptimisticMove {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    placement: Placement,
    generation: u64,
}

/// Working set of one item kind plus its reconciliation bookkeeping
#[derive(Debug)]
struct Mirror<T> {
    items: OrderedCollection<T>,
    authoritative: Option<Signature>,
    /// Latest unconfirmed placement per item
    pending: HashMap<Uuid, Pending>,
}

impl<T: Positioned> Mirror<T> {
    fn new() -> Self {
        Self {
            items: OrderedCollection::new(),
            authoritative: None,
            pending: HashMap::new(),
        }
    }

    fn reconcile(&mut self, kind: ItemKind, items: Vec<T>) -> CoreResult<ReconcileOutcome> {
        let incoming = Signature::of(&items);

        if self.authoritative.as_ref() == Some(&incoming) {
            debug!("{} listing unchanged, keeping working set", kind);
            return Ok(ReconcileOutcome::Unchanged);
        }

        self.items = items.into_iter().collect();
        self.authoritative = Some(incoming);

        // Moves still in flight are newer than anything this listing saw
        self.pending.retain(|id, _| self.items.contains(*id));
        for pending in self.pending.values() {
            let placement = pending.placement;
            self.items
                .place(placement.item_id, placement.scope_id, placement.position)?;
        }

        info!(
            "Replaced {} working set with {} items ({} pending moves kept)",
            kind,
            self.items.len(),
            self.pending.len()
        );
        Ok(ReconcileOutcome::Replaced)
    }

    #[track_caller]
    fn apply(
        &mut self,
        kind: ItemKind,
        generation: u64,
        placements: Vec<Placement>,
    ) -> CoreResult<OptimisticMove> {
        let mut previous = Vec::with_capacity(placements.len());
        for placement in &placements {
            let item = self
                .items
                .get(placement.item_id)
                .ok_or_else(|| CoreError::ItemNotFound {
                    item_id: placement.item_id,
                    location: ErrorLocation::from(Location::caller()),
                })?;
            previous.push(Placement {
                item_id: placement.item_id,
                scope_id: item.scope_id(),
                position: item.position(),
            });
        }

        for placement in &placements {
            self.items
                .place(placement.item_id, placement.scope_id, placement.position)?;
            self.pending.insert(
                placement.item_id,
                Pending {
                    placement: *placement,
                    generation,
                },
            );
        }

        Ok(OptimisticMove {
            kind,
            generation,
            previous,
            applied: placements,
        })
    }

    fn confirm(&mut self, generation: u64) {
        self.pending
            .retain(|_, pending| pending.generation != generation);
    }

    fn abandon(&mut self, generation: u64) {
        self.pending
            .retain(|_, pending| pending.generation != generation);
        self.authoritative = None;
    }

    fn rollback(&mut self, optimistic: &OptimisticMove) -> CoreResult<usize> {
        let mut restored = 0;

        for previous in &optimistic.previous {
            let owner = self
                .pending
                .get(&previous.item_id)
                .map(|pending| pending.generation);

            // A later move owns this item now
            if owner != Some(optimistic.generation) {
                continue;
            }

            self.pending.remove(&previous.item_id);
            if self.items.contains(previous.item_id) {
                self.items
                    .place(previous.item_id, previous.scope_id, previous.position)?;
                restored += 1;
            }
        }

        Ok(restored)
    }
}

/// Working set of one open board: its columns and all of its
/// non-archived tasks.
#[derive(Debug)]
pub struct ReconciliationCache {
    board_id: Uuid,
    columns: Mirror<Column>,
    tasks: Mirror<Task>,
    generation: u64,
}

impl ReconciliationCache {
    pub fn new(board_id: Uuid) -> Self {
        Self {
            board_id,
            columns: Mirror::new(),
            tasks: Mirror::new(),
            generation: 0,
        }
    }

    pub fn board_id(&self) -> Uuid {
        self.board_id
    }

    /// Columns in display order
    pub fn columns(&self) -> Vec<&Column> {
        self.columns.items.list_by_scope(self.board_id)
    }

    /// Tasks of one column in display order
    pub fn tasks_in(&self, column_id: Uuid) -> Vec<&Task> {
        self.tasks.items.list_by_scope(column_id)
    }

    pub fn column_collection(&self) -> &OrderedCollection<Column> {
        &self.columns.items
    }

    pub fn task_collection(&self) -> &OrderedCollection<Task> {
        &self.tasks.items
    }

    /// Compute a move against the current optimistic view
    #[track_caller]
    pub fn plan_move(
        &self,
        allocator: &PositionAllocator,
        kind: ItemKind,
        item_id: Uuid,
        target_scope: Uuid,
        target_index: usize,
    ) -> CoreResult<MovePlan> {
        match kind {
            ItemKind::Column => {
                self.columns
                    .items
                    .plan_move(allocator, item_id, target_scope, target_index)
            }
            ItemKind::Task => {
                self.tasks
                    .items
                    .plan_move(allocator, item_id, target_scope, target_index)
            }
        }
    }

    /// Place one item immediately, ahead of the store confirming it
    #[track_caller]
    pub fn apply_optimistic_move(
        &mut self,
        kind: ItemKind,
        item_id: Uuid,
        new_scope: Uuid,
        new_position: Position,
    ) -> CoreResult<OptimisticMove> {
        self.apply_placements(
            kind,
            vec![Placement {
                item_id,
                scope_id: new_scope,
                position: new_position,
            }],
        )
    }

    /// Apply every placement of a plan as one optimistic move
    #[track_caller]
    pub fn apply_plan(&mut self, kind: ItemKind, plan: &MovePlan) -> CoreResult<OptimisticMove> {
        let placements = plan
            .placements()
            .into_iter()
            .map(|(item_id, scope_id, position)| Placement {
                item_id,
                scope_id,
                position,
            })
            .collect();
        self.apply_placements(kind, placements)
    }

    #[track_caller]
    fn apply_placements(
        &mut self,
        kind: ItemKind,
        placements: Vec<Placement>,
    ) -> CoreResult<OptimisticMove> {
        self.generation += 1;
        let generation = self.generation;

        let applied = match kind {
            ItemKind::Column => self.columns.apply(kind, generation, placements),
            ItemKind::Task => self.tasks.apply(kind, generation, placements),
        }?;

        debug!(
            "Applied optimistic {} move #{} touching {} items",
            kind,
            generation,
            applied.applied.len()
        );
        Ok(applied)
    }

    pub fn reconcile_columns(&mut self, columns: Vec<Column>) -> CoreResult<ReconcileOutcome> {
        self.columns.reconcile(ItemKind::Column, columns)
    }

    /// Archived tasks in the listing are ignored
    pub fn reconcile_tasks(&mut self, tasks: Vec<Task>) -> CoreResult<ReconcileOutcome> {
        let active = tasks.into_iter().filter(|task| !task.is_archived()).collect();
        self.tasks.reconcile(ItemKind::Task, active)
    }

    /// The store accepted the move; it no longer needs protecting
    pub fn confirm(&mut self, optimistic: &OptimisticMove) {
        match optimistic.kind {
            ItemKind::Column => self.columns.confirm(optimistic.generation),
            ItemKind::Task => self.tasks.confirm(optimistic.generation),
        }
    }

    /// The store rejected the move and it stays as-is in the cache. The move
    /// is no longer protected and the next listing replaces the working set
    /// whatever its signature.
    pub fn abandon(&mut self, optimistic: &OptimisticMove) {
        match optimistic.kind {
            ItemKind::Column => self.columns.abandon(optimistic.generation),
            ItemKind::Task => self.tasks.abandon(optimistic.generation),
        }
        info!(
            "Abandoned {} move #{}, next listing will resync",
            optimistic.kind, optimistic.generation
        );
    }

    /// Put back the pre-move placements of items no later move has touched.
    /// Returns how many items were restored.
    pub fn rollback(&mut self, optimistic: &OptimisticMove) -> CoreResult<usize> {
        let restored = match optimistic.kind {
            ItemKind::Column => self.columns.rollback(optimistic),
            ItemKind::Task => self.tasks.rollback(optimistic),
        }?;

        info!(
            "Rolled back {} of {} items of {} move #{}",
            restored,
            optimistic.previous.len(),
            optimistic.kind,
            optimistic.generation
        );
        Ok(restored)
    }

    /// Signature of the current (possibly optimistic) view
    pub fn signature(&self, kind: ItemKind) -> Signature {
        match kind {
            ItemKind::Column => Signature::of(self.columns.items.iter()),
            ItemKind::Task => Signature::of(self.tasks.items.iter()),
        }
    }

    /// Signature of the last listing accepted from the store
    pub fn authoritative_signature(&self, kind: ItemKind) -> Option<&Signature> {
        match kind {
            ItemKind::Column => self.columns.authoritative.as_ref(),
            ItemKind::Task => self.tasks.authoritative.as_ref(),
        }
    }

    /// Items with an unconfirmed optimistic placement
    pub fn pending_count(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Column => self.columns.pending.len(),
            ItemKind::Task => self.tasks.pending.len(),
        }
    }
}
