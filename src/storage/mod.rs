pub mod config;
pub mod file;
#[cfg(test)]
pub mod memory;

use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

/// 任务列表存储键
pub const TASKS_KEY: &str = "tasks";
/// 主题偏好存储键
pub const THEME_KEY: &str = "theme";

/// 字符串键值存储能力
///
/// 对应浏览器 localStorage 的语义：按键读写整段字符串，没有事务，后写覆盖先写。
pub trait KeyValueStore {
    /// 读取键值，不存在返回 `None`
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// 写入键值（同步完成后才返回）
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

/// 获取 ~/.todolist/ 目录路径
pub fn todolist_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".todolist"))
        .ok_or_else(|| TodoError::config("cannot find home directory"))
}

/// 解析后的文件位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub base: PathBuf,
    pub config: PathBuf,
    pub storage: PathBuf,
    pub log: PathBuf,
}

impl Paths {
    /// 以 `base` 为根目录，结合配置中的覆盖项计算各文件路径
    pub fn resolve(base: &Path, config: &config::Config) -> Self {
        let storage = config
            .storage
            .path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| base.join("storage.json"));
        let log = config
            .log
            .file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| base.join("todolist.log"));

        Self {
            base: base.to_path_buf(),
            config: config::config_path(base),
            storage,
            log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_default_layout() {
        let base = PathBuf::from("/tmp/todo-home");
        let paths = Paths::resolve(&base, &config::Config::default());
        assert_eq!(paths.config, base.join("config.toml"));
        assert_eq!(paths.storage, base.join("storage.json"));
        assert_eq!(paths.log, base.join("todolist.log"));
    }

    #[test]
    fn test_paths_config_overrides() {
        let base = PathBuf::from("/tmp/todo-home");
        let mut config = config::Config::default();
        config.storage.path = Some("/srv/lists/work.json".to_string());
        config.log.file = Some("/var/log/todolist.log".to_string());

        let paths = Paths::resolve(&base, &config);
        assert_eq!(paths.storage, PathBuf::from("/srv/lists/work.json"));
        assert_eq!(paths.log, PathBuf::from("/var/log/todolist.log"));
        assert_eq!(paths.config, base.join("config.toml"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let inner = MemoryStore::new();
        let mut boxed: Box<dyn KeyValueStore> = Box::new(inner.clone());
        boxed.save(THEME_KEY, "dark").unwrap();
        assert_eq!(boxed.load(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(inner.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
