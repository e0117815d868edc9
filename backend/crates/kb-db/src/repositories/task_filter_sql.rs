//! Compiles a task scope and filter clauses into SQL conditions.
//!
//! Each [`FilterClause`] maps to exactly one condition so the stored
//! listing selects the same tasks as [`kb_core::FilterEvaluator`].

use kb_core::{FilterClause, TaskScope};

use sqlx::{QueryBuilder, Sqlite};

/// Appends ` WHERE ...` for the scope and clauses. Archived tasks are
/// always excluded. Expects the task table aliased as `t`.
pub(crate) fn push_conditions(
    builder: &mut QueryBuilder<'_, Sqlite>,
    scope: &TaskScope,
    clauses: &[FilterClause],
) {
    builder.push(" WHERE t.archived_at IS NULL");

    push_scope(builder, scope);

    for clause in clauses {
        push_clause(builder, clause);
    }
}

fn push_scope(builder: &mut QueryBuilder<'_, Sqlite>, scope: &TaskScope) {
    if let Some(project_id) = scope.project_id {
        builder
            .push(" AND t.project_id = ")
            .push_bind(project_id.to_string());
    }
    if let Some(board_id) = scope.board_id {
        builder
            .push(" AND t.board_id = ")
            .push_bind(board_id.to_string());
    }
    if let Some(column_id) = scope.column_id {
        builder
            .push(" AND t.column_id = ")
            .push_bind(column_id.to_string());
    }
    if let Some(assignee_id) = scope.assignee_id {
        builder
            .push(" AND t.assignee_id = ")
            .push_bind(assignee_id.to_string());
    }
}

fn push_clause(builder: &mut QueryBuilder<'_, Sqlite>, clause: &FilterClause) {
    match clause {
        // Needle is already ASCII-folded; lower() folds ASCII only
        FilterClause::TitleContains(needle) => {
            builder
                .push(" AND instr(lower(t.title), ")
                .push_bind(needle.clone())
                .push(") > 0");
        }
        FilterClause::PriorityIn(priorities) => {
            builder.push(" AND t.priority IN (");
            let mut list = builder.separated(", ");
            for priority in priorities {
                list.push_bind(i64::from(priority.value()));
            }
            list.push_unseparated(")");
        }
        FilterClause::DueOnOrAfter(from) => {
            builder
                .push(" AND (t.due_date IS NULL OR t.due_date >= ")
                .push_bind(from.format("%Y-%m-%d").to_string())
                .push(")");
        }
        FilterClause::DueOnOrBefore(to) => {
            builder
                .push(" AND (t.due_date IS NULL OR t.due_date <= ")
                .push_bind(to.format("%Y-%m-%d").to_string())
                .push(")");
        }
        FilterClause::HasAnyTag(tag_ids) => {
            builder.push(" AND t.id IN (SELECT tt.task_id FROM task_tags tt WHERE tt.tag_id IN (");
            let mut list = builder.separated(", ");
            for tag_id in tag_ids {
                list.push_bind(tag_id.to_string());
            }
            list.push_unseparated("))");
        }
        FilterClause::HasAllTags(tag_ids) => {
            builder.push(" AND t.id IN (SELECT tt.task_id FROM task_tags tt WHERE tt.tag_id IN (");
            let mut list = builder.separated(", ");
            for tag_id in tag_ids {
                list.push_bind(tag_id.to_string());
            }
            list.push_unseparated(") GROUP BY tt.task_id HAVING COUNT(DISTINCT tt.tag_id) = ");
            builder.push_bind(tag_ids.len() as i64).push(")");
        }
    }
}
