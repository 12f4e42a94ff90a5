//! 任务存储
//!
//! `TaskStore` 持有任务列表和主题偏好，启动时从键值存储读取一次，
//! 之后每次变更都把完整的任务列表和主题同步写回（write-through）。

use std::collections::HashSet;

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TodoError};
use crate::model::{Task, TaskCounts, TaskFilter, TaskId, ThemePreference};
use crate::storage::{KeyValueStore, TASKS_KEY, THEME_KEY};

/// 变更通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(TaskId),
    Toggled { id: TaskId, completed: bool },
    Deleted(TaskId),
    ThemeChanged(ThemePreference),
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct TaskStore<S: KeyValueStore, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    tasks: Vec<Task>,
    theme: ThemePreference,
    /// 最近分配（或加载到）的最大 ID
    last_id: Option<TaskId>,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// 使用系统时钟初始化
    pub fn initialize(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TaskStore<S, C> {
    /// 从存储读取任务和主题，这是整个生命周期中唯一一次读取
    ///
    /// 数据缺失或损坏时回退到空列表 / Light，不向调用方报错。
    pub fn with_clock(storage: S, clock: C) -> Self {
        let tasks = load_tasks(&storage);
        let theme = load_theme(&storage);
        let last_id = tasks.iter().map(|t| t.id).max();

        tracing::info!(tasks = tasks.len(), theme = %theme, "task store initialized");

        Self {
            storage,
            clock,
            tasks,
            theme,
            last_id,
            listeners: Vec::new(),
        }
    }

    /// 注册变更监听器
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks().iter().filter(|t| t.completed).count();
        TaskCounts {
            total: self.len(),
            completed,
            pending: self.len() - completed,
        }
    }

    /// 按过滤器查看任务（惰性、可重复遍历，保持列表顺序）
    pub fn filtered_view(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> + Clone + '_ {
        self.tasks().iter().filter(move |t| filter.matches(t))
    }

    /// 添加任务
    ///
    /// 去除首尾空白后为空时不做任何事，返回 `Ok(None)`；否则按原样保存文本。
    pub fn add_task(&mut self, text: &str) -> Result<Option<TaskId>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let id = self.next_id()?;
        self.tasks.push(Task::new(id, text));
        tracing::debug!(id, "task added");

        self.commit(StoreEvent::Added(id))?;
        Ok(Some(id))
    }

    /// 切换完成状态，ID 不存在时返回 `Ok(false)`
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        let completed = task.completed;
        tracing::debug!(id, completed, "task toggled");

        self.commit(StoreEvent::Toggled { id, completed })?;
        Ok(true)
    }

    /// 删除任务，其余任务顺序不变；ID 不存在时返回 `Ok(false)`
    pub fn delete_task(&mut self, id: TaskId) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        self.tasks.remove(index);
        tracing::debug!(id, "task deleted");

        self.commit(StoreEvent::Deleted(id))?;
        Ok(true)
    }

    /// 设置主题（同时重写任务列表）
    pub fn set_theme(&mut self, theme: ThemePreference) -> Result<()> {
        self.theme = theme;
        tracing::debug!(theme = %theme, "theme changed");
        self.commit(StoreEvent::ThemeChanged(theme))
    }

    /// 切换 Light / Dark，返回新主题
    pub fn toggle_theme(&mut self) -> Result<ThemePreference> {
        let theme = self.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// ID = max(当前毫秒, 上一个 ID + 1)，快速连续添加或时钟回拨也不会重复
    ///
    /// 上一个 ID 已是 `i64::MAX` 时，改为从当前毫秒起找第一个未被占用的 ID。
    fn next_id(&mut self) -> Result<TaskId> {
        let now = self.clock.now_millis();
        let id = match self.last_id {
            Some(last) if now <= last => match last.checked_add(1) {
                Some(id) => id,
                None => self.first_unused_id(now)?,
            },
            _ => now,
        };
        self.last_id = Some(self.last_id.map_or(id, |last| last.max(id)));
        Ok(id)
    }

    fn first_unused_id(&self, from: TaskId) -> Result<TaskId> {
        let used: HashSet<TaskId> = self.tasks.iter().map(|t| t.id).collect();
        (from..=TaskId::MAX)
            .find(|id| !used.contains(id))
            .ok_or_else(|| TodoError::invalid_data("no task id available"))
    }

    /// 写回存储后通知监听器；写入失败时内存状态保持已变更
    fn commit(&mut self, event: StoreEvent) -> Result<()> {
        let result = self.persist();
        if let Err(ref e) = result {
            tracing::error!(error = %e, event = ?event, "failed to persist task store");
        }
        for listener in &mut self.listeners {
            listener(&event);
        }
        result
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.tasks)
            .map_err(|e| TodoError::storage(format!("serialize tasks: {}", e)))?;
        self.storage.save(TASKS_KEY, &json)?;
        self.storage.save(THEME_KEY, self.theme.as_str())?;
        Ok(())
    }
}

fn load_tasks<S: KeyValueStore>(storage: &S) -> Vec<Task> {
    let raw = match storage.load(TASKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read tasks, starting empty");
            return Vec::new();
        }
    };

    let tasks: Vec<Task> = match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
        Ok(tasks) => tasks.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "stored tasks are malformed, starting empty");
            return Vec::new();
        }
    };

    // 重复 ID 只保留第一个
    let mut seen = HashSet::with_capacity(tasks.len());
    let before = tasks.len();
    let tasks: Vec<Task> = tasks.into_iter().filter(|t| seen.insert(t.id)).collect();
    if tasks.len() != before {
        tracing::warn!(dropped = before - tasks.len(), "dropped tasks with duplicate ids");
    }
    tasks
}

fn load_theme<S: KeyValueStore>(storage: &S) -> ThemePreference {
    match storage.load(THEME_KEY) {
        Ok(Some(raw)) => ThemePreference::from_stored(&raw),
        Ok(None) => ThemePreference::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read theme, using light");
            ThemePreference::default()
        }
    }
}
