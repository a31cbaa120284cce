//! 评论的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    extract::{AppJson, ResourceId},
    middleware::AppState,
    models::comment::CreateCommentRequest,
    response::ApiResponse,
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

/// 新增评论
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    AppJson(req): AppJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let comment = state.comment_service.create(&auth_context, req).await?;

    Ok(ApiResponse::ok_data(comment))
}

/// 文章下的评论列表（路径参数为文章 ID）
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
    ResourceId(post_id): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    let comments = state.comment_service.list_by_post(post_id).await?;

    Ok(ApiResponse::ok_data(comments))
}

/// 删除评论（仅作者）
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    ResourceId(id): ResourceId,
) -> Result<impl IntoResponse, AppError> {
    state.comment_service.delete(&auth_context, id).await?;

    Ok(ApiResponse::ok_msg("comment deleted"))
}
