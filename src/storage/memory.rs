use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::KeyValueStore;
use crate::error::{Result, TodoError};

/// 内存键值存储（测试用）
///
/// Clone 共享同一份数据，测试可以保留一个句柄检查写入结果。
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    saves: Rc<Cell<usize>>,
    fail_saves: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带初始数据创建
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    /// 直接读取（不经过 trait）
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// 成功写入次数
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// 让之后的写入全部失败
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_saves.get() {
            return Err(TodoError::storage(format!("write to '{}' rejected", key)));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.save("theme", "dark").unwrap();

        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_failing_saves() {
        let mut store = MemoryStore::with_entries([("theme", "light")]);
        store.set_fail_saves(true);

        assert!(store.save("theme", "dark").is_err());
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.save_count(), 0);
    }
}
