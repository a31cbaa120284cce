//! Post repository

use crate::{
    error::AppError,
    models::post::{Post, PostWithAuthor},
};
use sqlx::PgPool;

const SELECT_WITH_AUTHOR: &str = r#"
    SELECT p.id, p.title, p.content, p.user_id, p.created_at, p.updated_at,
           u.username AS author_username, u.email AS author_email
    FROM posts p
    JOIN users u ON u.id = p.user_id
"#;

pub struct PostRepository {
    db: PgPool,
}

impl PostRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 创建文章
    pub async fn create(&self, user_id: i64, title: &str, content: &str) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(post)
    }

    /// 根据 ID 查找文章（不含作者信息）
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(post)
    }

    /// 根据 ID 查找文章及作者
    pub async fn find_with_author(&self, id: i64) -> Result<Option<PostWithAuthor>, AppError> {
        let post = sqlx::query_as::<_, PostWithAuthor>(&format!(
            "{} WHERE p.id = $1",
            SELECT_WITH_AUTHOR
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(post)
    }

    /// 列出所有文章，最新的在前
    pub async fn list_with_author(&self) -> Result<Vec<PostWithAuthor>, AppError> {
        let posts = sqlx::query_as::<_, PostWithAuthor>(&format!(
            "{} ORDER BY p.created_at DESC, p.id DESC",
            SELECT_WITH_AUTHOR
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(posts)
    }

    /// 更新文章内容，只作用于属于 `user_id` 的行
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        title: &str,
        content: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $3, content = $4, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(title)
        .bind(content)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// 删除文章，只作用于属于 `user_id` 的行
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
