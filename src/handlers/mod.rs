//! HTTP 处理器模块

pub mod comment;
pub mod health;
pub mod post;
pub mod user;
