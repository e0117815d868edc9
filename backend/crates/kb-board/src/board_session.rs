//! State container for one open board.

use crate::board_mutation_service::lock;
use crate::{
    BoardMutationService, BoardResult, BoardStore, ItemKind, ReconcileOutcome,
    ReconciliationCache, Signature,
};

use kb_config::BoardConfig;
use kb_core::{Column, FilterEvaluator, Position, PositionAllocator, Task, TaskFilter};

use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info};
use uuid::Uuid;

/// What a refresh did to each working set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub columns: ReconcileOutcome,
    pub tasks: ReconcileOutcome,
}

/// One board as seen by one client.
///
/// The session owns the working set (all columns and all non-archived tasks
/// of the board) and the active filter. Views are computed from the working
/// set in memory; only [`refresh`](Self::refresh),
/// [`fetch_filtered`](Self::fetch_filtered) and the reorder operations reach
/// the store.
pub struct BoardSession<S> {
    board_id: Uuid,
    store: Arc<S>,
    cache: Mutex<ReconciliationCache>,
    filter: Mutex<TaskFilter>,
    mutations: BoardMutationService<S>,
}

impl<S: BoardStore> BoardSession<S> {
    pub fn new(store: Arc<S>, board_id: Uuid, allocator: PositionAllocator) -> Self {
        Self {
            board_id,
            mutations: BoardMutationService::new(Arc::clone(&store), allocator, false),
            store,
            cache: Mutex::new(ReconciliationCache::new(board_id)),
            filter: Mutex::new(TaskFilter::default()),
        }
    }

    pub fn from_config(store: Arc<S>, board_id: Uuid, config: &BoardConfig) -> Self {
        Self::new(store, board_id, config.allocator())
            .with_rollback_on_failure(config.rollback_on_failure)
    }

    pub fn with_rollback_on_failure(mut self, enabled: bool) -> Self {
        self.mutations = BoardMutationService::new(
            Arc::clone(&self.store),
            *self.mutations.allocator(),
            enabled,
        );
        self
    }

    pub fn board_id(&self) -> Uuid {
        self.board_id
    }

    /// Fetch the full working set and reconcile it into the cache
    pub async fn refresh(&self) -> BoardResult<RefreshOutcome> {
        let columns = self.store.list_columns(self.board_id).await?;
        let tasks = self
            .store
            .list_tasks(self.board_id, &TaskFilter::default())
            .await?;

        let mut cache = lock(&self.cache);
        let outcome = RefreshOutcome {
            columns: cache.reconcile_columns(columns)?,
            tasks: cache.reconcile_tasks(tasks)?,
        };

        debug!("Refreshed board {}: {:?}", self.board_id, outcome);
        Ok(outcome)
    }

    /// Ask the store for the tasks matching the session filter
    pub async fn fetch_filtered(&self) -> BoardResult<Vec<Task>> {
        let filter = self.filter();
        self.store.list_tasks(self.board_id, &filter).await
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_filter(&self, filter: TaskFilter) {
        info!("Board {} filter set to {:?}", self.board_id, filter);
        *self.filter.lock().unwrap_or_else(PoisonError::into_inner) = filter;
    }

    pub fn columns(&self) -> Vec<Column> {
        lock(&self.cache).columns().into_iter().cloned().collect()
    }

    /// Every task of one column in display order, ignoring the filter
    pub fn tasks_in(&self, column_id: Uuid) -> Vec<Task> {
        lock(&self.cache)
            .tasks_in(column_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Tasks of one column that pass the session filter, in display order
    pub fn visible_tasks(&self, column_id: Uuid) -> Vec<Task> {
        let filter = self.filter();
        let cache = lock(&self.cache);
        FilterEvaluator::select(cache.tasks_in(column_id), &filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Visible tasks of the whole board, ordered the way the store lists them
    pub fn visible_board_tasks(&self) -> Vec<Task> {
        let filter = self.filter();
        let cache = lock(&self.cache);
        FilterEvaluator::select_ordered(cache.task_collection().iter(), &filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn signature(&self, kind: ItemKind) -> Signature {
        lock(&self.cache).signature(kind)
    }

    pub fn pending_count(&self, kind: ItemKind) -> usize {
        lock(&self.cache).pending_count(kind)
    }

    pub async fn reorder_column(
        &self,
        column_id: Uuid,
        target_index: usize,
    ) -> BoardResult<Position> {
        self.mutations
            .reorder(
                &self.cache,
                ItemKind::Column,
                column_id,
                self.board_id,
                target_index,
            )
            .await
    }

    /// Move a task to `target_index` of the full order of `column_id`
    pub async fn reorder_task(
        &self,
        task_id: Uuid,
        column_id: Uuid,
        target_index: usize,
    ) -> BoardResult<Position> {
        self.mutations
            .reorder(&self.cache, ItemKind::Task, task_id, column_id, target_index)
            .await
    }

    /// Move a task to `visible_index` of the filtered view of `column_id`.
    ///
    /// The task lands right before the visible task currently at that index,
    /// or right after the last visible task when the index is past the end.
    /// Hidden tasks keep their keys.
    pub async fn reorder_task_visible(
        &self,
        task_id: Uuid,
        column_id: Uuid,
        visible_index: usize,
    ) -> BoardResult<Position> {
        let target_index = self.full_index(task_id, column_id, visible_index);
        debug!(
            "Visible index {} in column {} maps to index {}",
            visible_index, column_id, target_index
        );
        self.reorder_task(task_id, column_id, target_index).await
    }

    fn full_index(&self, task_id: Uuid, column_id: Uuid, visible_index: usize) -> usize {
        let filter = self.filter();
        let cache = lock(&self.cache);

        let scope: Vec<&Task> = cache
            .tasks_in(column_id)
            .into_iter()
            .filter(|task| task.id != task_id)
            .collect();
        let visible: Vec<usize> = scope
            .iter()
            .enumerate()
            .filter(|(_, task)| FilterEvaluator::matches(task, &filter))
            .map(|(index, _)| index)
            .collect();

        match (visible.get(visible_index), visible.last()) {
            (Some(&anchor), _) => anchor,
            (None, Some(&last)) => last + 1,
            (None, None) => scope.len(),
        }
    }
}
