//! 日志与追踪系统
//! 初始化结构化日志

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 依赖库的默认级别，避免 sqlx 逐条输出查询语句
const DEPENDENCY_DIRECTIVES: &[&str] = &["sqlx=warn", "hyper=info", "tower_http=info"];

/// 构造过滤器：`RUST_LOG` 优先，否则使用配置级别并压低依赖库
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = std::iter::once(level)
            .chain(DEPENDENCY_DIRECTIVES.iter().copied())
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(directives)
    })
}

/// 初始化日志与追踪系统
pub fn init_telemetry(config: &LoggingConfig) {
    let log_layer = if config.format.eq_ignore_ascii_case("json") {
        // JSON 行携带 http_request span 的 trace_id / request_id
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(log_layer)
        .init();

    tracing::info!(
        service = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        level = %config.level,
        format = %config.format,
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_quiets_dependencies() {
        std::env::remove_var("RUST_LOG");

        let filter = build_filter("debug").to_string();
        assert!(filter.contains("debug"));
        assert!(filter.contains("sqlx=warn"));
    }
}
