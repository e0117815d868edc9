use crate::{FilterClause, Priority, TagMode, TaskFilter};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_default_filter_when_inspected_then_empty() {
    let filter = TaskFilter::default();

    assert!(filter.is_empty());
    assert_that!(filter.tag_mode(), eq(TagMode::Or));
    assert_that!(filter.clauses(), is_empty());
}

#[test]
fn given_blank_text_when_built_then_no_text_constraint() {
    let filter = TaskFilter::builder().text("   ").build();

    assert_that!(filter.text(), none());
    assert!(filter.is_empty());
}

#[test]
fn given_padded_text_when_built_then_trimmed() {
    let filter = TaskFilter::builder().text("  Login ").build();

    assert_that!(filter.text(), some(eq("Login")));
}

#[test]
fn given_tag_mode_without_tags_when_built_then_no_clause() {
    let filter = TaskFilter::builder().tag_mode(TagMode::And).build();

    assert!(filter.is_empty());
}

#[test]
fn given_all_dimensions_when_compiled_then_clauses_in_fixed_order() {
    let tag = Uuid::new_v4();
    let filter = TaskFilter::builder()
        .tag_ids([tag])
        .tag_mode(TagMode::And)
        .priorities([Priority::new(1).unwrap()])
        .text("Deploy")
        .due_to(chrono::NaiveDate::from_ymd_opt(2026, 5, 1))
        .due_from(chrono::NaiveDate::from_ymd_opt(2026, 4, 1))
        .build();

    let clauses = filter.clauses();
    let names: Vec<&str> = clauses.iter().map(|c| c.name()).collect();

    assert_that!(
        names,
        eq(&vec![
            "title_contains",
            "priority_in",
            "due_on_or_after",
            "due_on_or_before",
            "has_all_tags",
        ])
    );
    assert_that!(
        clauses[0],
        eq(&FilterClause::TitleContains("deploy".to_string()))
    );
}

#[test]
fn given_duplicate_priorities_when_built_then_deduplicated() {
    let p = Priority::new(2).unwrap();
    let filter = TaskFilter::builder().priorities([p, p]).build();

    assert_that!(filter.priorities().len(), eq(1));
}
