use crate::ApiError;

use kb_core::{CoreError, Position};
use kb_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_code() {
    let (status, json) = body_json(ApiError::NotFound {
        message: "Task x not found".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"]["code"], eq(&serde_json::json!("NOT_FOUND")));
    assert_that!(json["error"]["message"], eq(&serde_json::json!("Task x not found")));
    assert_that!(json["error"].get("field"), none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let (status, json) = body_json(ApiError::validation("Title too long", "title")).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["code"], eq(&serde_json::json!("VALIDATION_ERROR")));
    assert_that!(json["error"]["field"], eq(&serde_json::json!("title")));
}

#[tokio::test]
async fn given_bad_request_when_rendered_then_400_bad_request_code() {
    let (status, json) = body_json(ApiError::bad_request("missing scope")).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["code"], eq(&serde_json::json!("BAD_REQUEST")));
}

#[tokio::test]
async fn given_non_finite_position_when_converted_then_validation_error() {
    let error: ApiError = Position::new(f64::NAN).unwrap_err().into();
    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["field"], eq(&serde_json::json!("position")));
}

#[tokio::test]
async fn given_item_missing_from_working_set_when_converted_then_not_found() {
    let error: ApiError = CoreError::ItemNotFound {
        item_id: Uuid::new_v4(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, _) = body_json(error).await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn given_db_not_found_when_converted_then_not_found_with_entity() {
    let error: ApiError = DbError::NotFound {
        entity: "Column",
        id: "abc".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"]["message"], eq(&serde_json::json!("Column abc not found")));
}

#[tokio::test]
async fn given_generic_sqlx_error_when_converted_then_internal_without_details() {
    let error: ApiError = DbError::from(sqlx::Error::PoolTimedOut).into();

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"]["code"], eq(&serde_json::json!("INTERNAL_ERROR")));
    assert_that!(
        json["error"]["message"],
        eq(&serde_json::json!("Database operation failed"))
    );
}
