//! 评论服务

use crate::{
    auth::{middleware::AuthContext, ownership::require_owner},
    error::AppError,
    models::comment::*,
    repository::{CommentRepository, PostRepository},
};
use sqlx::PgPool;
use validator::Validate;

pub struct CommentService {
    db: PgPool,
}

impl CommentService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 新增评论，必须关联已存在的文章
    pub async fn create(
        &self,
        auth_context: &AuthContext,
        req: CreateCommentRequest,
    ) -> Result<CommentResponse, AppError> {
        if req.post_id <= 0 {
            return Err(AppError::validation("missing post id"));
        }
        req.validate()?;

        if PostRepository::new(self.db.clone())
            .find_by_id(req.post_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation("post does not exist"));
        }

        let repo = CommentRepository::new(self.db.clone());
        let comment = repo
            .create(req.post_id, auth_context.user_id, &req.body)
            .await?;

        tracing::info!(
            comment_id = comment.id,
            post_id = comment.post_id,
            user_id = auth_context.user_id,
            "Comment created"
        );

        repo.find_with_author(comment.id)
            .await?
            .map(CommentResponse::from)
            .ok_or_else(|| AppError::internal_error("created comment vanished"))
    }

    /// 查询文章下的评论列表
    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<CommentResponse>, AppError> {
        let comments = CommentRepository::new(self.db.clone())
            .list_by_post(post_id)
            .await?;

        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// 删除评论（仅作者）
    pub async fn delete(&self, auth_context: &AuthContext, id: i64) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db.clone());
        let comment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("comment"))?;

        require_owner(comment.user_id, auth_context)?;

        if !repo.delete(id, auth_context.user_id).await? {
            return Err(AppError::not_found("comment"));
        }

        tracing::info!(comment_id = id, user_id = auth_context.user_id, "Comment deleted");

        Ok(())
    }
}
