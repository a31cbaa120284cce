//! 文章的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    extract::{AppJson, ResourceId},
    middleware::AppState,
    models::post::PostRequest,
    response::ApiResponse,
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

/// 创建文章
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    AppJson(req): AppJson<PostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let post = state.post_service.create(&auth_context, req).await?;

    Ok(ApiResponse::ok_data(post))
}

/// 文章列表
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let posts = state.post_service.list().await?;

    Ok(ApiResponse::ok_data(posts))
}

/// 文章详情
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    let post = state.post_service.get(id).await?;

    Ok(ApiResponse::ok_data(post))
}

/// 更新文章（仅作者）
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    ResourceId(id): ResourceId,
    AppJson(req): AppJson<PostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let post = state.post_service.update(&auth_context, id, req).await?;

    Ok(ApiResponse::ok_data(post))
}

/// 删除文章（仅作者）
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    state.post_service.delete(&auth_context, id).await?;

    Ok(ApiResponse::ok_msg("post deleted"))
}
