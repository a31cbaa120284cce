//! Resource ownership checks for mutating requests

use crate::{auth::middleware::AuthContext, error::AppError};

/// Whether `acting_user_id` may mutate a resource owned by `owner_id`
pub fn authorize(owner_id: i64, acting_user_id: i64) -> bool {
    owner_id == acting_user_id
}

/// Fail with `Forbidden` unless the caller owns the resource
pub fn require_owner(owner_id: i64, auth_context: &AuthContext) -> Result<(), AppError> {
    if authorize(owner_id, auth_context.user_id) {
        Ok(())
    } else {
        tracing::warn!(
            owner_id,
            acting_user_id = auth_context.user_id,
            "Ownership check failed"
        );
        Err(AppError::Forbidden)
    }
}
