//! 日志初始化
//!
//! 终端由 TUI 独占，日志写入文件而不是 stderr。

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, TodoError};

/// 覆盖配置中日志级别的环境变量
pub const LOG_ENV: &str = "TODOLIST_LOG";

/// 构造过滤器：环境变量优先，其次配置文件中的级别
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| level_filter(level))
}

/// 只按配置级别构造过滤器，无法解析时退回 info
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 安装全局 subscriber，日志追加到 `path`
pub fn init(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| TodoError::config(format!("logging already initialized: {}", e)))
}
