//! 文件键值存储
//!
//! 整个存储是一个 JSON 对象（键 → 字符串值），打开时读取一次，
//! 每次写入都重写整个文件。

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::KeyValueStore;
use crate::error::Result;

/// 基于单个 JSON 文件的键值存储
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// 打开存储文件
    ///
    /// 文件不存在视为空存储；内容损坏（非 UTF-8、非 JSON 对象）时记录警告并同样视为空存储，
    /// 下次写入会覆盖损坏的文件。值不是字符串的键单独丢弃，其余键照常读取。
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = match fs::read(&path) {
            Ok(bytes) => parse_entries(&path, &bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened storage file");
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn parse_entries(path: &Path, bytes: &[u8]) -> BTreeMap<String, String> {
    let map = match serde_json::from_slice::<Map<String, Value>>(bytes) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "storage file is corrupt, starting empty");
            return BTreeMap::new();
        }
    };

    map.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            other => {
                tracing::warn!(key = %key, value = %other, "ignoring non-string storage value");
                None
            }
        })
        .collect()
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("storage.json")).unwrap();
        assert_eq!(store.load("tasks").unwrap(), None);
    }

    #[test]
    fn test_save_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.save("theme", "dark").unwrap();
        store.save("tasks", "[]").unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.load("tasks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_save_overwrites_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.save("theme", "dark").unwrap();
        store.save("theme", "light").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.load("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_corrupt_file_is_empty_and_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.load("tasks").unwrap(), None);

        store.save("theme", "dark").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_non_utf8_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.load("theme").unwrap(), None);

        store.save("theme", "dark").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.load("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_non_string_value_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(
            &path,
            r#"{"tasks":[{"id":1,"text":"a","completed":false}],"theme":"dark"}"#,
        )
        .unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.load("tasks").unwrap(), None);
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_layout_is_string_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store
            .save("tasks", r#"[{"id":1,"text":"a","completed":false}]"#)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["tasks"].is_string());
    }
}
