//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// 键值存储文件路径（默认 ~/.todolist/storage.json）
    #[serde(default)]
    pub path: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// tracing 过滤指令 (e.g., "info", "todolist=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 日志文件路径（默认 ~/.todolist/todolist.log）
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// 获取配置文件路径
pub fn config_path(base: &Path) -> PathBuf {
    base.join("config.toml")
}

/// 读取配置，文件不存在时返回默认值；读取或解析失败时返回错误
pub fn try_load_config(base: &Path) -> Result<Config> {
    let path = config_path(base);
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}

/// 加载配置（不存在或无法解析则返回默认值）
pub fn load_config(base: &Path) -> Config {
    try_load_config(base).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring {}: {}", config_path(base).display(), e);
        Config::default()
    })
}

/// 保存配置
pub fn save_config(base: &Path, config: &Config) -> io::Result<()> {
    fs::create_dir_all(base)?;

    let content = toml::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(config_path(base), content)
}
