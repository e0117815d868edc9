use crate::{FilterClause, Positioned, Task, TaskFilter};

/// Decides task inclusion for a [`TaskFilter`].
///
/// Active dimensions combine with AND. Archived tasks never match, the same
/// as every default store listing.
pub struct FilterEvaluator;

impl FilterEvaluator {
    pub fn matches(task: &Task, filter: &TaskFilter) -> bool {
        Self::matches_clauses(task, &filter.clauses())
    }

    pub fn matches_clauses(task: &Task, clauses: &[FilterClause]) -> bool {
        !task.is_archived() && clauses.iter().all(|clause| clause.matches(task))
    }

    /// Matching tasks in their input order
    pub fn select<'a, I>(tasks: I, filter: &TaskFilter) -> Vec<&'a Task>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let clauses = filter.clauses();
        tasks
            .into_iter()
            .filter(|task| Self::matches_clauses(task, &clauses))
            .collect()
    }

    /// Matching tasks ordered the way the store lists them: key, then id
    pub fn select_ordered<'a, I>(tasks: I, filter: &TaskFilter) -> Vec<&'a Task>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut selected = Self::select(tasks, filter);
        selected.sort_by(|a, b| {
            a.position()
                .cmp(&b.position())
                .then_with(|| a.id.cmp(&b.id))
        });
        selected
    }
}
