use crate::tests::task_with_priority;
use crate::{Task, TaskDto, parse_date};

use chrono::NaiveDate;
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_task_with_dates_and_tags_when_converted_through_dto_then_fields_survive() {
    let mut task = task_with_priority(Uuid::new_v4(), 1500.5, 3);
    task.due_date = NaiveDate::from_ymd_opt(2026, 3, 1);
    task.tags.insert(Uuid::new_v4());

    let dto = TaskDto::from(task.clone());
    assert_that!(dto.due_date.as_deref(), some(eq("2026-03-01")));

    let back = Task::try_from(dto).unwrap();
    assert_that!(back.id, eq(task.id));
    assert_that!(back.position, eq(task.position));
    assert_that!(back.priority, eq(task.priority));
    assert_that!(back.tags, eq(&task.tags));
    assert_that!(back.due_date, eq(task.due_date));
}

#[test]
fn given_dto_with_bad_priority_when_converted_then_error() {
    let mut dto = TaskDto::from(task_with_priority(Uuid::new_v4(), 1.0, 1));
    dto.priority = 9;

    assert_that!(Task::try_from(dto), err(anything()));
}

#[test]
fn given_dto_with_malformed_date_when_converted_then_error() {
    let mut dto = TaskDto::from(task_with_priority(Uuid::new_v4(), 1.0, 1));
    dto.due_date = Some("01/03/2026".to_string());

    assert_that!(Task::try_from(dto), err(anything()));
}

#[test]
fn given_four_digit_year_when_date_parsed_then_accepted() {
    assert_that!(parse_date(" 0999-12-31 "), ok(eq(&NaiveDate::from_ymd_opt(999, 12, 31).unwrap())));
    assert_that!(parse_date("2026-01-01"), ok(anything()));
}

#[test]
fn given_signed_or_five_digit_year_when_date_parsed_then_rejected() {
    for raw in ["+10000-01-01", "-0001-01-01", "+2026-01-01", "10000-01-01", "026-01-01"] {
        assert_that!(parse_date(raw), err(anything()));
    }
}
