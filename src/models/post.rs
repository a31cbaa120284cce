//! Post domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::UserSummary;

/// Post row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post joined with its author
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub author_email: Option<String>,
}

/// Create / update post request
#[derive(Debug, Deserialize, Validate)]
pub struct PostRequest {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

/// Post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostWithAuthor> for PostResponse {
    fn from(row: PostWithAuthor) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            user_id: row.user_id,
            user: UserSummary {
                id: row.user_id,
                username: row.author_username,
                email: row.author_email,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_request_validation() {
        let ok = PostRequest {
            title: "Hello".to_string(),
            content: "World".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_title = PostRequest {
            title: String::new(),
            content: "World".to_string(),
        };
        assert!(empty_title.validate().is_err());

        let long_title = PostRequest {
            title: "t".repeat(256),
            content: "World".to_string(),
        };
        assert!(long_title.validate().is_err());

        let empty_content = PostRequest {
            title: "Hello".to_string(),
            content: String::new(),
        };
        assert!(empty_content.validate().is_err());
    }

    #[test]
    fn test_post_response_embeds_author() {
        let now = Utc::now();
        let row = PostWithAuthor {
            id: 3,
            title: "Hello".to_string(),
            content: "World".to_string(),
            user_id: 9,
            created_at: now,
            updated_at: now,
            author_username: "alice".to_string(),
            author_email: Some("alice@example.com".to_string()),
        };

        let response = PostResponse::from(row);
        assert_eq!(response.user_id, 9);
        assert_eq!(response.user.id, 9);
        assert_eq!(response.user.username, "alice");
    }
}
