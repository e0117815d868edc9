use crate::{Priority, TagMode, TaskFilter, TaskFilterParams};

use chrono::NaiveDate;
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_no_params_when_converted_then_empty_filter_in_or_mode() {
    let filter = TaskFilterParams::default().into_filter().unwrap();

    assert!(filter.is_empty());
    assert_that!(filter.tag_mode(), eq(TagMode::Or));
}

#[test]
fn given_full_params_when_converted_then_typed_filter() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let params = TaskFilterParams {
        q: Some("login".to_string()),
        prio: Some("2, 4".to_string()),
        df: Some("2026-01-01".to_string()),
        dt: Some("2026-01-31".to_string()),
        tag_ids: Some(format!("{},{}", a, b)),
        tag_mode: Some("AND".to_string()),
    };

    let filter = params.into_filter().unwrap();

    assert_that!(filter.text(), some(eq("login")));
    assert_that!(filter.priorities().len(), eq(2));
    assert!(filter.priorities().contains(&Priority::new(4).unwrap()));
    assert_that!(filter.due_from(), eq(NaiveDate::from_ymd_opt(2026, 1, 1)));
    assert_that!(filter.due_to(), eq(NaiveDate::from_ymd_opt(2026, 1, 31)));
    assert!(filter.tag_ids().contains(&a) && filter.tag_ids().contains(&b));
    assert_that!(filter.tag_mode(), eq(TagMode::And));
}

#[test]
fn given_out_of_range_priority_when_converted_then_error() {
    let params = TaskFilterParams {
        prio: Some("1,9".to_string()),
        ..Default::default()
    };

    let err = params.into_filter().unwrap_err();

    assert!(err.is_validation());
    assert_that!(err.field(), some(eq("priority")));
}

#[test]
fn given_bad_tag_id_when_converted_then_error() {
    let params = TaskFilterParams {
        tag_ids: Some("not-a-uuid".to_string()),
        ..Default::default()
    };

    assert_that!(params.into_filter(), err(anything()));
}

#[test]
fn given_bad_date_when_converted_then_error() {
    let params = TaskFilterParams {
        df: Some("2026-13-40".to_string()),
        ..Default::default()
    };

    assert_that!(params.into_filter(), err(anything()));
}

#[test]
fn given_five_digit_year_bound_when_converted_then_error() {
    let params = TaskFilterParams {
        df: Some("+10000-01-01".to_string()),
        ..Default::default()
    };

    assert_that!(params.into_filter(), err(anything()));
}

#[test]
fn given_unknown_mode_when_converted_then_error() {
    let params = TaskFilterParams {
        tag_mode: Some("xor".to_string()),
        ..Default::default()
    };

    assert_that!(params.into_filter(), err(anything()));
}

#[test]
fn given_filter_when_converted_to_params_then_or_mode_omitted() {
    let tag = Uuid::new_v4();
    let filter = TaskFilter::builder()
        .priorities([Priority::new(2).unwrap(), Priority::new(4).unwrap()])
        .tag_ids([tag])
        .build();

    let params = TaskFilterParams::from(&filter);

    assert_that!(params.prio.as_deref(), some(eq("2,4")));
    assert_that!(params.tag_ids, some(eq(&tag.to_string())));
    assert_that!(params.tag_mode, none());
    assert_that!(params.q, none());
    assert_that!(params.into_filter().unwrap(), eq(&filter));
}

#[test]
fn given_params_when_serialized_then_camel_case_tag_keys() {
    let params = TaskFilterParams {
        tag_ids: Some("x".to_string()),
        tag_mode: Some("and".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_value(&params).unwrap();

    assert_that!(json["tagIds"].as_str(), some(eq("x")));
    assert_that!(json["tagMode"].as_str(), some(eq("and")));
    assert!(json.get("q").is_none());
}
