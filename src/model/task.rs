use serde::{Deserialize, Serialize};

/// 任务 ID（毫秒时间戳派生，单调递增）
pub type TaskId = i64;

/// 任务数据
///
/// 持久化格式与 `tasks` 键下的 JSON 数组元素一致：
/// `{"id": 1700000000000, "text": "buy milk", "completed": false}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// 创建后不可变
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// 列表过滤器（只存在于内存，每次启动重置为 All）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    /// 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "ALL",
            TaskFilter::Completed => "COMPLETED",
            TaskFilter::Pending => "PENDING",
        }
    }

    /// 所有过滤器（Tab 顺序）
    pub fn all() -> &'static [TaskFilter] {
        &[TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending]
    }

    /// 切换到下一个过滤器
    pub fn next(&self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::Pending,
            TaskFilter::Pending => TaskFilter::All,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        }
    }
}

/// 任务计数（Header 显示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_json_layout() {
        let task = Task::new(1700000000000, "buy milk");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"id":1700000000000,"text":"buy milk","completed":false}"#
        );
    }

    #[test]
    fn test_task_missing_completed_defaults_false() {
        let task: Task = serde_json::from_str(r#"{"id":5,"text":"x"}"#).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn test_filter_matches() {
        let mut done = Task::new(1, "done");
        done.completed = true;
        let open = Task::new(2, "open");

        assert!(TaskFilter::All.matches(&done));
        assert!(TaskFilter::All.matches(&open));
        assert!(TaskFilter::Completed.matches(&done));
        assert!(!TaskFilter::Completed.matches(&open));
        assert!(TaskFilter::Pending.matches(&open));
        assert!(!TaskFilter::Pending.matches(&done));
    }

    #[test]
    fn test_filter_cycle() {
        let mut filter = TaskFilter::default();
        assert_eq!(filter, TaskFilter::All);
        for expected in [TaskFilter::Completed, TaskFilter::Pending, TaskFilter::All] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
        assert_eq!(TaskFilter::all().len(), 3);
    }
}
