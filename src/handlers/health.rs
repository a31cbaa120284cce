//! 健康检查处理器
//! 提供 /health 和 /ready 端点，响应同样使用统一信封

use axum::{extract::State, response::IntoResponse};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{db, middleware::AppState, response::ApiResponse};

/// 数据库探测的时间上限
const MAX_PROBE_BUDGET: Duration = Duration::from_secs(3);

/// 存活探针数据
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// 就绪探针数据
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: Vec<HealthCheck>,
}

/// 健康检查项
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: &'static str,
    pub status: &'static str,
}

static APP_START_TIME: OnceCell<Instant> = OnceCell::new();

/// 设置应用启动时间（main 中调用一次）
pub fn set_start_time() {
    let _ = APP_START_TIME.set(Instant::now());
}

/// 获取应用运行时间（秒）
pub fn get_uptime() -> u64 {
    APP_START_TIME
        .get()
        .map_or(0, |start| start.elapsed().as_secs())
}

/// 探测预算：请求超时的一半，且不超过 [`MAX_PROBE_BUDGET`]
fn probe_budget(request_timeout_secs: u64) -> Duration {
    (Duration::from_secs(request_timeout_secs) / 2).min(MAX_PROBE_BUDGET)
}

/// 存活探针
/// 快速响应，不检查依赖
pub async fn health_check() -> impl IntoResponse {
    ApiResponse::ok_data(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: get_uptime(),
    })
}

/// 就绪探针
/// 数据库不可用时返回 503
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let budget = probe_budget(state.config.server.request_timeout_secs);
    let database = db::probe(&state.db, budget).await;

    let checks = vec![HealthCheck {
        name: "database",
        status: database.describe(),
    }];

    if database.is_up() {
        ApiResponse::ok_data(ReadinessResponse { ready: true, checks })
    } else {
        ApiResponse::fail_with(
            503,
            "service not ready",
            ReadinessResponse {
                ready: false,
                checks,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_budget_stays_below_request_timeout() {
        assert_eq!(probe_budget(10), Duration::from_secs(3));
        assert_eq!(probe_budget(4), Duration::from_secs(2));
        assert_eq!(probe_budget(1), Duration::from_millis(500));
    }
}
