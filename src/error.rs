//! todolist 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// todolist 错误类型
#[derive(Debug, Error)]
pub enum TodoError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON 解析 / 序列化错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 存储错误（写入失败等）
    #[error("Storage error: {0}")]
    Storage(String),

    /// 无效数据
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// todolist Result 类型别名
pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 Storage 错误
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// 创建 InvalidData 错误
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TodoError::storage("disk full");
        assert_eq!(err.to_string(), "Storage error: disk full");

        let err = TodoError::invalid_data("unknown theme 'blue'");
        assert_eq!(err.to_string(), "Invalid data: unknown theme 'blue'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TodoError = io_err.into();
        assert!(matches!(err, TodoError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: TodoError = json_err.into();
        assert!(matches!(err, TodoError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
