//! 用户注册与登录的 HTTP 处理器

use crate::{
    error::AppError,
    extract::AppJson,
    middleware::AppState,
    models::{auth::LoginRequest, user::RegisterRequest},
    response::ApiResponse,
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

/// 用户注册
pub async fn register(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.auth_service.register(req).await?;

    Ok(ApiResponse::ok_msg("registration successful"))
}

/// 用户登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login(req).await?;

    Ok(ApiResponse::ok_data(response))
}
