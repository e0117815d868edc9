use crate::tests::{task_at, task_with_priority};
use crate::{FilterEvaluator, Priority, TagMode, Task, TaskFilter};

use chrono::{NaiveDate, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn priorities(values: &[i64]) -> Vec<Priority> {
    values.iter().map(|v| Priority::new(*v).unwrap()).collect()
}

fn tagged(column_id: Uuid, position: f64, tags: &[Uuid]) -> Task {
    let mut task = task_at(column_id, position);
    task.tags = tags.iter().copied().collect();
    task
}

#[test]
fn given_empty_filter_when_evaluated_then_every_active_task_matches() {
    let column_id = Uuid::new_v4();
    let task = task_at(column_id, 1000.0);

    assert!(FilterEvaluator::matches(&task, &TaskFilter::default()));
}

#[test]
fn given_archived_task_when_evaluated_then_never_matches() {
    let column_id = Uuid::new_v4();
    let mut task = task_at(column_id, 1000.0);
    task.archived_at = Some(Utc::now());

    assert!(!FilterEvaluator::matches(&task, &TaskFilter::default()));
}

#[test]
fn given_priority_set_when_selected_then_only_listed_priorities_in_key_order() {
    let column_id = Uuid::new_v4();
    let tasks = vec![
        task_with_priority(column_id, 5000.0, 4),
        task_with_priority(column_id, 1000.0, 0),
        task_with_priority(column_id, 4000.0, 4),
        task_with_priority(column_id, 2000.0, 2),
        task_with_priority(column_id, 3000.0, 3),
    ];
    let filter = TaskFilter::builder().priorities(priorities(&[2, 4])).build();

    let selected = FilterEvaluator::select_ordered(&tasks, &filter);

    let keys: Vec<f64> = selected.iter().map(|t| t.position.value()).collect();
    assert_that!(keys, eq(&vec![2000.0, 4000.0, 5000.0]));
}

#[test]
fn given_text_when_evaluated_then_title_matched_ignoring_case() {
    let column_id = Uuid::new_v4();
    let mut task = task_at(column_id, 1000.0);
    task.title = "Fix Login Redirect".to_string();
    task.description = Some("nothing about payments".to_string());

    let hit = TaskFilter::builder().text("login").build();
    let miss = TaskFilter::builder().text("payments").build();

    assert!(FilterEvaluator::matches(&task, &hit));
    assert!(!FilterEvaluator::matches(&task, &miss));
}

#[test]
fn given_due_range_when_evaluated_then_undated_tasks_pass() {
    let column_id = Uuid::new_v4();
    let undated = task_at(column_id, 1000.0);
    let mut early = task_at(column_id, 2000.0);
    early.due_date = Some(date(2026, 1, 10));
    let mut inside = task_at(column_id, 3000.0);
    inside.due_date = Some(date(2026, 2, 1));
    let mut on_bound = task_at(column_id, 4000.0);
    on_bound.due_date = Some(date(2026, 2, 28));

    let filter = TaskFilter::builder()
        .due_from(Some(date(2026, 2, 1)))
        .due_to(Some(date(2026, 2, 28)))
        .build();

    assert!(FilterEvaluator::matches(&undated, &filter));
    assert!(!FilterEvaluator::matches(&early, &filter));
    assert!(FilterEvaluator::matches(&inside, &filter));
    assert!(FilterEvaluator::matches(&on_bound, &filter));
}

#[test]
fn given_or_mode_when_evaluated_then_any_selected_tag_matches() {
    let column_id = Uuid::new_v4();
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let only_a = tagged(column_id, 1000.0, &[a]);
    let only_c = tagged(column_id, 2000.0, &[c]);

    let filter = TaskFilter::builder()
        .tag_ids([a, b])
        .tag_mode(TagMode::Or)
        .build();

    assert!(FilterEvaluator::matches(&only_a, &filter));
    assert!(!FilterEvaluator::matches(&only_c, &filter));
}

#[test]
fn given_and_mode_when_evaluated_then_every_selected_tag_required() {
    let column_id = Uuid::new_v4();
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let both = tagged(column_id, 1000.0, &[a, b, c]);
    let only_a = tagged(column_id, 2000.0, &[a]);

    let filter = TaskFilter::builder()
        .tag_ids([a, b])
        .tag_mode(TagMode::And)
        .build();

    assert!(FilterEvaluator::matches(&both, &filter));
    assert!(!FilterEvaluator::matches(&only_a, &filter));
}

#[test]
fn given_several_dimensions_when_evaluated_then_all_must_hold() {
    let column_id = Uuid::new_v4();
    let tag = Uuid::new_v4();
    let mut task = tagged(column_id, 1000.0, &[tag]);
    task.title = "Write release notes".to_string();
    task.priority = Priority::new(3).unwrap();

    let matching = TaskFilter::builder()
        .text("release")
        .priorities(priorities(&[3]))
        .tag_ids([tag])
        .build();
    let wrong_priority = TaskFilter::builder()
        .text("release")
        .priorities(priorities(&[1]))
        .tag_ids([tag])
        .build();

    assert!(FilterEvaluator::matches(&task, &matching));
    assert!(!FilterEvaluator::matches(&task, &wrong_priority));
}

#[test]
fn given_tasks_when_selected_then_input_order_kept() {
    let column_id = Uuid::new_v4();
    let tasks = vec![task_at(column_id, 3000.0), task_at(column_id, 1000.0)];

    let selected = FilterEvaluator::select(&tasks, &TaskFilter::default());

    assert_that!(selected, len(eq(2)));
    assert_that!(selected[0].id, eq(tasks[0].id));
}
