//! 错误处理单元测试
//!
//! 测试错误到响应信封的转换

use axum::{http::StatusCode, response::IntoResponse};
use blog_service::{auth::jwt::TokenError, error::AppError, response::ApiResponse};
use http_body_util::BodyExt;
use serde_json::{json, Value};

async fn envelope(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_unauthorized_envelope() {
    let (status, body) = envelope(AppError::Unauthorized.into_response()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "code": 401, "msg": "unauthorized" }));
}

#[tokio::test]
async fn test_token_error_becomes_unauthorized_envelope() {
    let error: AppError = TokenError::Expired.into();
    let (status, body) = envelope(error.into_response()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["msg"], "unauthorized");
}

#[tokio::test]
async fn test_validation_envelope_carries_message() {
    let (status, body) =
        envelope(AppError::validation("username already exists").into_response()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "code": 400, "msg": "username already exists" }));
}

#[tokio::test]
async fn test_authentication_envelope() {
    let (status, body) =
        envelope(AppError::authentication("incorrect password").into_response()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 401);
    assert_eq!(body["msg"], "incorrect password");
}

#[tokio::test]
async fn test_forbidden_and_not_found_envelopes() {
    let (status, body) = envelope(AppError::Forbidden.into_response()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 403);

    let (status, body) = envelope(AppError::not_found("post").into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_internal_errors_hide_details() {
    let (status, body) =
        envelope(AppError::Database(sqlx::Error::RowNotFound).into_response()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["msg"], "Database error occurred");

    let (_, body) = envelope(AppError::internal_error("hash params").into_response()).await;
    assert_eq!(body["msg"], "Internal server error");
}

#[tokio::test]
async fn test_success_envelopes() {
    let (status, body) = envelope(ApiResponse::ok_msg("post deleted").into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "code": 200, "msg": "post deleted" }));

    let (status, body) = envelope(ApiResponse::ok_data(vec![1, 2, 3]).into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"], json!([1, 2, 3]));
}
