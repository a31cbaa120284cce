//! 文章服务：增删改查，修改与删除仅限作者

use crate::{
    auth::{middleware::AuthContext, ownership::require_owner},
    error::AppError,
    models::post::*,
    repository::PostRepository,
};
use sqlx::PgPool;
use validator::Validate;

pub struct PostService {
    db: PgPool,
}

impl PostService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn repo(&self) -> PostRepository {
        PostRepository::new(self.db.clone())
    }

    /// 创建文章，作者为当前用户
    pub async fn create(
        &self,
        auth_context: &AuthContext,
        req: PostRequest,
    ) -> Result<PostResponse, AppError> {
        req.validate()?;

        let repo = self.repo();
        let post = repo
            .create(auth_context.user_id, &req.title, &req.content)
            .await?;

        tracing::info!(post_id = post.id, user_id = auth_context.user_id, "Post created");

        self.get(post.id).await
    }

    /// 获取所有文章
    pub async fn list(&self) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.repo().list_with_author().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// 获取单篇文章
    pub async fn get(&self, id: i64) -> Result<PostResponse, AppError> {
        self.repo()
            .find_with_author(id)
            .await?
            .map(PostResponse::from)
            .ok_or_else(|| AppError::not_found("post"))
    }

    /// 更新文章
    pub async fn update(
        &self,
        auth_context: &AuthContext,
        id: i64,
        req: PostRequest,
    ) -> Result<PostResponse, AppError> {
        let repo = self.repo();
        let post = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("post"))?;

        require_owner(post.user_id, auth_context)?;
        req.validate()?;

        if !repo
            .update(id, auth_context.user_id, &req.title, &req.content)
            .await?
        {
            return Err(AppError::not_found("post"));
        }

        tracing::info!(post_id = id, user_id = auth_context.user_id, "Post updated");

        self.get(id).await
    }

    /// 删除文章（评论随之级联删除）
    pub async fn delete(&self, auth_context: &AuthContext, id: i64) -> Result<(), AppError> {
        let repo = self.repo();
        let post = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("post"))?;

        require_owner(post.user_id, auth_context)?;

        if !repo.delete(id, auth_context.user_id).await? {
            return Err(AppError::not_found("post"));
        }

        tracing::info!(post_id = id, user_id = auth_context.user_id, "Post deleted");

        Ok(())
    }
}
