//! Comment repository

use crate::{
    error::AppError,
    models::comment::{Comment, CommentWithAuthor},
};
use sqlx::PgPool;

pub struct CommentRepository {
    db: PgPool,
}

impl CommentRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 新增评论
    ///
    /// 文章不存在时外键冲突转换为校验错误
    pub async fn create(&self, post_id: i64, user_id: i64, body: &str) -> Result<Comment, AppError> {
        sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, user_id, body)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .bind(body)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation("post does not exist")
            }
            other => AppError::Database(other),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError> {
        let comment = sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(comment)
    }

    pub async fn find_with_author(&self, id: i64) -> Result<Option<CommentWithAuthor>, AppError> {
        let comment = sqlx::query_as::<_, CommentWithAuthor>(
            r#"
            SELECT c.id, c.post_id, c.user_id, c.body, c.created_at, c.updated_at,
                   u.username AS author_username, u.email AS author_email
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(comment)
    }

    /// 查询文章下的评论，按时间正序
    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<CommentWithAuthor>, AppError> {
        let comments = sqlx::query_as::<_, CommentWithAuthor>(
            r#"
            SELECT c.id, c.post_id, c.user_id, c.body, c.created_at, c.updated_at,
                   u.username AS author_username, u.email AS author_email
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.post_id = $1
            ORDER BY c.created_at ASC, c.id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.db)
        .await?;

        Ok(comments)
    }

    /// 删除评论，只作用于属于 `user_id` 的行
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
