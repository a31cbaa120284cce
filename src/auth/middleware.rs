//! JWT 认证中间件

use crate::{
    auth::jwt::{TokenError, TokenService},
    error::AppError,
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// 认证上下文（经过验证的调用者身份）
///
/// 由 [`jwt_auth_middleware`] 附加到请求上，handler 通过参数直接声明获取。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i64,
    pub username: String,
}

// 实现 FromRequestParts 以便在 handler 中直接提取 AuthContext
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// 认证被拒绝的原因（仅用于日志与指标）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    NoHeader,
    MalformedHeader,
    InvalidToken(TokenError),
}

impl GateRejection {
    fn as_str(&self) -> &'static str {
        match self {
            GateRejection::NoHeader => "no_header",
            GateRejection::MalformedHeader => "malformed_header",
            GateRejection::InvalidToken(TokenError::InvalidSignature) => "invalid_signature",
            GateRejection::InvalidToken(TokenError::Expired) => "expired",
            GateRejection::InvalidToken(TokenError::Malformed) => "malformed_token",
        }
    }
}

/// 从 Authorization 头提取令牌，格式必须是 `Bearer <token>`
pub fn extract_token(headers: &HeaderMap) -> Result<&str, GateRejection> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(GateRejection::NoHeader)?
        .to_str()
        .map_err(|_| GateRejection::MalformedHeader)?;

    match value.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() => Ok(token),
        _ => Err(GateRejection::MalformedHeader),
    }
}

/// 校验请求头并解析出调用者身份
pub fn authenticate(
    token_service: &TokenService,
    headers: &HeaderMap,
) -> Result<AuthContext, GateRejection> {
    let token = extract_token(headers)?;

    let subject = token_service
        .validate(token)
        .map_err(GateRejection::InvalidToken)?;

    Ok(AuthContext {
        user_id: subject.user_id,
        username: subject.username,
    })
}

/// JWT 认证中间件 - 必须认证
pub async fn jwt_auth_middleware(
    State(token_service): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_context = match authenticate(&token_service, req.headers()) {
        Ok(ctx) => ctx,
        Err(rejection) => {
            let reason = rejection.as_str();
            tracing::info!(reason, uri = %req.uri(), "Authentication rejected");
            metrics::counter!("auth_gate_rejections_total", "reason" => reason).increment(1);
            return Err(AppError::Unauthorized);
        }
    };

    tracing::debug!(user_id = auth_context.user_id, "Request authenticated");

    // 附加到请求扩展
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
