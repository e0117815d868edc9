use crate::tests::{pos, task_at};
use crate::{CoreError, OrderedCollection, PositionAllocator, Positioned, Task};

use googletest::prelude::*;
use uuid::Uuid;

fn collection_of(tasks: &[Task]) -> OrderedCollection<Task> {
    tasks.iter().cloned().collect()
}

fn keys_of(collection: &OrderedCollection<Task>, scope_id: Uuid) -> Vec<f64> {
    collection
        .list_by_scope(scope_id)
        .iter()
        .map(|t| t.position.value())
        .collect()
}

fn ids_of(collection: &OrderedCollection<Task>, scope_id: Uuid) -> Vec<Uuid> {
    collection
        .list_by_scope(scope_id)
        .iter()
        .map(|t| t.id)
        .collect()
}

#[test]
fn given_last_task_when_moved_to_top_then_takes_key_below_first() {
    let column_id = Uuid::new_v4();
    let tasks = vec![
        task_at(column_id, 1000.0),
        task_at(column_id, 2000.0),
        task_at(column_id, 3000.0),
    ];
    let mut collection = collection_of(&tasks);
    let allocator = PositionAllocator::default();

    let plan = collection
        .move_within_or_between_scopes(&allocator, tasks[2].id, column_id, 0)
        .unwrap();

    assert_that!(plan.position, eq(pos(999.0)));
    assert!(!plan.is_renumbered());
    assert_that!(
        ids_of(&collection, column_id),
        eq(&vec![tasks[2].id, tasks[0].id, tasks[1].id])
    );
    assert_that!(keys_of(&collection, column_id), eq(&vec![999.0, 1000.0, 2000.0]));
}

#[test]
fn given_task_when_dropped_on_own_slot_then_noop() {
    let column_id = Uuid::new_v4();
    let tasks = vec![
        task_at(column_id, 1000.0),
        task_at(column_id, 2000.0),
        task_at(column_id, 3000.0),
    ];
    let mut collection = collection_of(&tasks);

    let plan = collection
        .move_within_or_between_scopes(&PositionAllocator::default(), tasks[1].id, column_id, 1)
        .unwrap();

    assert!(plan.is_noop());
    assert_that!(plan.placements(), is_empty());
    assert_that!(keys_of(&collection, column_id), eq(&vec![1000.0, 2000.0, 3000.0]));
}

#[test]
fn given_task_when_moved_to_other_column_then_placed_between_neighbours() {
    let source = Uuid::new_v4();
    let target = Uuid::new_v4();
    let tasks = vec![
        task_at(source, 1000.0),
        task_at(source, 2000.0),
        task_at(target, 1000.0),
        task_at(target, 2000.0),
    ];
    let mut collection = collection_of(&tasks);

    let plan = collection
        .move_within_or_between_scopes(&PositionAllocator::default(), tasks[0].id, target, 1)
        .unwrap();

    assert_that!(plan.from_scope, eq(source));
    assert_that!(plan.to_scope, eq(target));
    assert_that!(plan.position, eq(pos(1500.0)));
    assert_that!(collection.list_by_scope(source), len(eq(1)));
    assert_that!(
        ids_of(&collection, target),
        eq(&vec![tasks[2].id, tasks[0].id, tasks[3].id])
    );
    assert_that!(collection.get(tasks[0].id).unwrap().column_id, eq(target));
}

#[test]
fn given_task_when_moved_into_empty_column_then_default_key() {
    let source = Uuid::new_v4();
    let target = Uuid::new_v4();
    let task = task_at(source, 5000.0);
    let mut collection = collection_of(std::slice::from_ref(&task));

    let plan = collection
        .move_within_or_between_scopes(&PositionAllocator::default(), task.id, target, 0)
        .unwrap();

    assert_that!(plan.position, eq(pos(1000.0)));
    assert_that!(collection.list_by_scope(source), is_empty());
}

#[test]
fn given_index_past_end_when_moved_then_appended() {
    let column_id = Uuid::new_v4();
    let tasks = vec![
        task_at(column_id, 1000.0),
        task_at(column_id, 2000.0),
        task_at(column_id, 3000.0),
    ];
    let mut collection = collection_of(&tasks);

    let plan = collection
        .move_within_or_between_scopes(&PositionAllocator::default(), tasks[0].id, column_id, 99)
        .unwrap();

    assert_that!(plan.position, eq(pos(3001.0)));
    assert_that!(collection.index_of(tasks[0].id), some(eq(2)));
}

#[test]
fn given_repeated_inserts_at_same_slot_when_precision_runs_out_then_scope_renumbered() {
    let staging = Uuid::new_v4();
    let target = Uuid::new_v4();
    let first = task_at(target, 1000.0);
    let last = task_at(target, 2000.0);
    let incoming: Vec<Task> = (0..200).map(|i| task_at(staging, i as f64)).collect();

    let mut collection = collection_of(&[first.clone(), last.clone()]);
    for task in &incoming {
        collection.insert(task.clone());
    }
    let allocator = PositionAllocator::default();

    let mut renumbered_plan = None;
    for task in &incoming {
        let plan = collection
            .move_within_or_between_scopes(&allocator, task.id, target, 1)
            .unwrap();
        if plan.is_renumbered() {
            renumbered_plan = Some(plan);
            break;
        }
    }

    let plan = renumbered_plan.expect("renumbering never triggered");
    let keys = keys_of(&collection, target);
    let expected: Vec<f64> = (1..=keys.len()).map(|i| i as f64 * 1000.0).collect();
    assert_that!(keys, eq(&expected));
    assert_that!(plan.renumbered, len(eq(keys.len())));
    assert_that!(collection.index_of(plan.item_id), some(eq(1)));
    assert_that!(ids_of(&collection, target).first(), some(eq(&first.id)));
    assert_that!(ids_of(&collection, target).last(), some(eq(&last.id)));
}

#[test]
fn given_equal_keys_when_listed_then_ordered_by_id() {
    let column_id = Uuid::new_v4();
    let a = task_at(column_id, 1000.0);
    let b = task_at(column_id, 1000.0);
    let collection = collection_of(&[a.clone(), b.clone()]);

    let mut expected = vec![a.id, b.id];
    expected.sort();

    assert_that!(ids_of(&collection, column_id), eq(&expected));
}

#[test]
fn given_uneven_keys_when_scope_renumbered_then_order_kept() {
    let column_id = Uuid::new_v4();
    let tasks = vec![
        task_at(column_id, 100.0),
        task_at(column_id, 5.0),
        task_at(column_id, 7.5),
    ];
    let mut collection = collection_of(&tasks);

    let renumbered = collection
        .renumber_scope(&PositionAllocator::default(), column_id)
        .unwrap();

    assert_that!(renumbered, len(eq(3)));
    assert_that!(
        ids_of(&collection, column_id),
        eq(&vec![tasks[1].id, tasks[2].id, tasks[0].id])
    );
    assert_that!(keys_of(&collection, column_id), eq(&vec![1000.0, 2000.0, 3000.0]));
}

#[test]
fn given_unknown_item_when_moved_then_item_not_found() {
    let mut collection: OrderedCollection<Task> = OrderedCollection::new();

    let result = collection.move_within_or_between_scopes(
        &PositionAllocator::default(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        0,
    );

    assert!(matches!(result, Err(CoreError::ItemNotFound { .. })));
}

#[test]
fn given_plan_when_not_applied_then_collection_unchanged() {
    let column_id = Uuid::new_v4();
    let tasks = vec![task_at(column_id, 1000.0), task_at(column_id, 2000.0)];
    let collection = collection_of(&tasks);

    let plan = collection
        .plan_move(&PositionAllocator::default(), tasks[1].id, column_id, 0)
        .unwrap();

    assert_that!(plan.position, eq(pos(999.0)));
    assert_that!(collection.get(tasks[1].id).unwrap().position(), eq(pos(2000.0)));
}
