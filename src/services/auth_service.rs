//! 认证服务：注册、登录

use crate::{
    auth::{jwt::TokenService, password::PasswordHasher},
    error::AppError,
    models::{auth::*, user::*},
    repository::UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

pub struct AuthService {
    db: PgPool,
    token_service: Arc<TokenService>,
    hasher: Arc<PasswordHasher>,
}

impl AuthService {
    pub fn new(db: PgPool, token_service: Arc<TokenService>, hasher: Arc<PasswordHasher>) -> Self {
        Self {
            db,
            token_service,
            hasher,
        }
    }

    /// 用户注册
    pub async fn register(&self, req: RegisterRequest) -> Result<UserResponse, AppError> {
        req.validate()?;

        let user_repo = UserRepository::new(self.db.clone());

        // 预检查用户名；并发注册的竞争由唯一索引兜底
        if user_repo.find_by_username(&req.username).await?.is_some() {
            return Err(AppError::validation("username already exists"));
        }

        let password_hash = self.hasher.hash(&req.password)?;

        let user = user_repo
            .create(&req.username, &password_hash, req.email.as_deref())
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(UserResponse::from(user))
    }

    /// 用户登录
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        req.validate()?;

        let user_repo = UserRepository::new(self.db.clone());

        let user = user_repo
            .find_by_username(&req.username)
            .await?
            .ok_or_else(|| AppError::authentication("user does not exist"))?;

        if !self.hasher.verify(&user.password_hash, &req.password) {
            tracing::info!(user_id = user.id, "Login failed: incorrect password");
            return Err(AppError::authentication("incorrect password"));
        }

        let token = self.token_service.issue(user.id, &user.username)?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            token,
            username: user.username,
            user_id: user.id,
        })
    }
}
