//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
};

use crate::{handlers, middleware::AppState};

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查）
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // 注册与登录（无需认证）
    let user_routes = Router::new()
        .route("/api/v1/user/register", post(handlers::user::register))
        .route("/api/v1/user/login", post(handlers::user::login));

    // 需要认证的路由
    let authenticated_routes = Router::new()
        .route(
            "/api/v1/posts",
            get(handlers::post::list_posts).post(handlers::post::create_post),
        )
        .route(
            "/api/v1/posts/{id}",
            get(handlers::post::get_post)
                .put(handlers::post::update_post)
                .delete(handlers::post::delete_post),
        )
        .route("/api/v1/comments", post(handlers::comment::create_comment))
        // GET 的路径参数是文章 ID，DELETE 的是评论 ID
        .route(
            "/api/v1/comments/{id}",
            get(handlers::comment::list_comments).delete(handlers::comment::delete_comment),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.token_service.clone(),
            crate::auth::middleware::jwt_auth_middleware,
        ));

    let server = &state.config.server;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_LENGTH, header::CONTENT_TYPE]);

    // 外层在前：追踪 -> 信封改写 -> panic 恢复 -> 请求体限制 -> CORS -> 压缩 -> 超时
    let layers = ServiceBuilder::new()
        .layer(axum::middleware::from_fn(
            crate::middleware::request_tracking_middleware,
        ))
        .layer(axum::middleware::from_fn(
            crate::middleware::envelope_layer_errors,
        ))
        .layer(CatchPanicLayer::custom(crate::middleware::handle_panic))
        .layer(RequestBodyLimitLayer::new(server.max_body_bytes))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout_secs),
        ));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(authenticated_routes)
        .fallback(crate::middleware::fallback)
        .layer(layers)
        .with_state(state)
}
