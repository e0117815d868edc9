use crate::TaskScope;
use crate::tests::task_at;

use uuid::Uuid;

#[test]
fn given_empty_scope_when_checked_then_contains_any_task() {
    let task = task_at(Uuid::new_v4(), 1000.0);

    assert!(TaskScope::default().contains(&task));
}

#[test]
fn given_column_scope_when_checked_then_other_columns_excluded() {
    let column_id = Uuid::new_v4();
    let inside = task_at(column_id, 1000.0);
    let outside = task_at(Uuid::new_v4(), 1000.0);

    let scope = TaskScope::column(column_id);

    assert!(scope.contains(&inside));
    assert!(!scope.contains(&outside));
}

#[test]
fn given_assignee_scope_when_checked_then_unassigned_excluded() {
    let assignee = Uuid::new_v4();
    let mut assigned = task_at(Uuid::new_v4(), 1000.0);
    assigned.assignee_id = Some(assignee);
    let mut unassigned = task_at(assigned.column_id, 2000.0);
    unassigned.board_id = assigned.board_id;

    let scope = TaskScope::board(assigned.board_id).with_assignee(assignee);

    assert!(scope.contains(&assigned));
    assert!(!scope.contains(&unassigned));
}
