//! HTTP 中间件
//! 应用状态、请求追踪、panic 恢复

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    auth::{PasswordHasher, TokenService},
    config::AppConfig,
    error::AppError,
    services::{AuthService, CommentService, PostService},
};

/// 应用状态
///
/// 服务全部是无内部可变状态的结构，使用 Arc 在请求间共享
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: sqlx::PgPool,
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub post_service: Arc<PostService>,
    pub comment_service: Arc<CommentService>,
}

impl AppState {
    /// 根据配置和连接池组装所有服务
    pub fn new(config: AppConfig, db: sqlx::PgPool) -> Result<Self, AppError> {
        let token_service = Arc::new(TokenService::new(&config.security.jwt_secret)?);
        let hasher = Arc::new(PasswordHasher::from_config(&config.security)?);

        Ok(Self {
            auth_service: Arc::new(AuthService::new(db.clone(), token_service.clone(), hasher)),
            post_service: Arc::new(PostService::new(db.clone())),
            comment_service: Arc::new(CommentService::new(db.clone())),
            token_service,
            config,
            db,
        })
    }
}

/// 请求追踪中间件
/// 为每个请求生成 trace_id 和 request_id，并记录指标
pub async fn request_tracking_middleware(req: Request, next: Next) -> Response {
    let trace_id = extract_or_generate_trace_id(req.headers());
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().clone();
    let uri = req.uri().to_string();

    let span = tracing::info_span!(
        "http_request",
        trace_id = %trace_id,
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    async move {
        let start = Instant::now();

        let mut response = next.run(req).await;

        let elapsed = start.elapsed();
        let status = response.status().as_u16();

        // 指标标签使用静态字符串
        let method_name = match method.as_str() {
            "GET" => "GET",
            "POST" => "POST",
            "PUT" => "PUT",
            "DELETE" => "DELETE",
            "OPTIONS" => "OPTIONS",
            _ => "UNKNOWN",
        };
        let status_code = match status {
            200 => "200",
            400 => "400",
            401 => "401",
            403 => "403",
            404 => "404",
            408 => "408",
            500 => "500",
            _ => "other",
        };

        metrics::counter!("http_requests_total", "method" => method_name, "status" => status_code)
            .increment(1);
        metrics::histogram!("http_request_duration_seconds").record(elapsed.as_secs_f64());

        tracing::info!(
            method = %method,
            uri = %uri,
            status = status,
            elapsed_ms = elapsed.as_millis(),
            "Request completed"
        );

        // 在响应头中回写 trace_id / request_id
        if let Ok(value) = HeaderValue::from_str(&trace_id) {
            response.headers_mut().insert("x-trace-id", value);
        }
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert("x-request-id", value);
        }

        response
    }
    .instrument(span)
    .await
}

/// 从请求头中提取或生成 trace_id
fn extract_or_generate_trace_id(headers: &HeaderMap) -> String {
    headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// panic 恢复：记录日志并返回 500 信封，进程继续服务
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");
    metrics::counter!("http_panics_total").increment(1);

    AppError::internal_error(&detail).into_response()
}

/// 超时层与请求体限制层自带的响应不是信封，在此改写
pub async fn envelope_layer_errors(req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }

    match response.status() {
        StatusCode::REQUEST_TIMEOUT => AppError::Timeout.into_response(),
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge.into_response(),
        _ => response,
    }
}

/// 未匹配的路由
pub async fn fallback() -> AppError {
    AppError::not_found("route")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::get, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn status_through_envelope(status: StatusCode) -> (StatusCode, serde_json::Value) {
        let app = Router::new()
            .route("/", get(move || async move { status }))
            .layer(axum::middleware::from_fn(envelope_layer_errors));

        let response = app
            .oneshot(axum::http::Request::new(Body::empty()))
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_layer_timeout_becomes_envelope() {
        let (status, body) = status_through_envelope(StatusCode::REQUEST_TIMEOUT).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body, serde_json::json!({ "code": 408, "msg": "request timed out" }));
    }

    #[tokio::test]
    async fn test_layer_payload_too_large_becomes_envelope() {
        let (status, body) = status_through_envelope(StatusCode::PAYLOAD_TOO_LARGE).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["code"], 413);
    }

    #[tokio::test]
    async fn test_other_statuses_pass_through() {
        let (status, body) = status_through_envelope(StatusCode::NO_CONTENT).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, serde_json::Value::Null);
    }

    #[test]
    fn test_extract_or_generate_trace_id() {
        let mut headers = HeaderMap::new();
        headers.insert("x-trace-id", "test-trace-123".parse().unwrap());

        let trace_id = extract_or_generate_trace_id(&headers);
        assert_eq!(trace_id, "test-trace-123");

        let headers = HeaderMap::new();
        let trace_id = extract_or_generate_trace_id(&headers);
        assert!(!trace_id.is_empty());
        assert_ne!(trace_id, "test-trace-123");
    }

    #[test]
    fn test_handle_panic_returns_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
