//! Authentication and authorization module

pub mod jwt;
pub mod middleware;
pub mod ownership;
pub mod password;

pub use jwt::{Claims, TokenError, TokenService, TokenSubject};
pub use middleware::{authenticate, extract_token, jwt_auth_middleware, AuthContext};
pub use ownership::{authorize, require_owner};
pub use password::PasswordHasher;
