use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::error::Result;
use crate::model::{Task, TaskFilter, TaskId};
use crate::storage::KeyValueStore;
use crate::store::{StoreEvent, TaskStore};
use crate::theme::{get_theme_colors, ThemeColors};

/// TUI 使用的 TaskStore（存储后端在启动时决定）
pub type AppStore = TaskStore<Box<dyn KeyValueStore>>;

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            is_error: true,
            ..Self::new(message, duration)
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 输入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// 浏览列表
    Normal,
    /// 正在输入新任务
    Editing,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    pub store: AppStore,
    /// 当前过滤器（不持久化）
    pub filter: TaskFilter,
    pub mode: InputMode,
    /// 待添加任务的输入内容
    pub input: String,
    /// 列表选择状态（索引基于过滤后的列表）
    pub list_state: ListState,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// store 通知队列，每次操作后处理
    events: Rc<RefCell<Vec<StoreEvent>>>,
}

impl App {
    pub fn new(mut store: AppStore) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let colors = get_theme_colors(store.theme());
        let mut app = Self {
            should_quit: false,
            store,
            filter: TaskFilter::All,
            mode: InputMode::Normal,
            input: String::new(),
            list_state: ListState::default(),
            toast: None,
            colors,
            show_help: false,
            events,
        };
        app.ensure_selection();
        app
    }

    /// 当前过滤器下可见的任务
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.filtered_view(self.filter).collect()
    }

    /// 当前选中的任务 ID
    pub fn selected_task_id(&self) -> Option<TaskId> {
        let index = self.list_state.selected()?;
        self.store
            .filtered_view(self.filter)
            .nth(index)
            .map(|t| t.id)
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
        self.list_state.select(None);
        self.ensure_selection();
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    // ========== 输入 ==========

    pub fn start_editing(&mut self) {
        self.mode = InputMode::Editing;
    }

    /// 取消输入并清空
    pub fn cancel_editing(&mut self) {
        self.mode = InputMode::Normal;
        self.input.clear();
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// 提交输入：成功添加后清空输入并回到浏览模式；空白输入保持不变
    pub fn submit_input(&mut self) {
        let result = self.store.add_task(&self.input);
        // 写入失败时内存中已添加，同样清空输入
        if !matches!(result, Ok(None)) {
            self.input.clear();
            self.mode = InputMode::Normal;
        }
        self.after_mutation(result.map(|_| ()));
    }

    // ========== 任务操作 ==========

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let result = self.store.toggle_completion(id);
        self.after_mutation(result.map(|_| ()));
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let result = self.store.delete_task(id);
        self.after_mutation(result.map(|_| ()));
    }

    pub fn toggle_theme(&mut self) {
        let result = self.store.toggle_theme();
        self.after_mutation(result.map(|_| ()));
    }

    /// 先处理通知，写入失败的提示最后显示以免被覆盖
    fn after_mutation(&mut self, result: Result<()>) {
        self.process_events();
        if let Err(e) = result {
            self.show_error(e);
        }
    }

    /// 处理 store 通知：刷新颜色、显示 Toast、修正选中项
    fn process_events(&mut self) {
        let events: Vec<StoreEvent> = self.events.borrow_mut().drain(..).collect();
        for event in events {
            match event {
                StoreEvent::Added(id) => {
                    if let Some(task) = self.store.get(id) {
                        let message = format!("Added: {}", task.text);
                        self.show_toast(message);
                    }
                    self.select_task(id);
                }
                StoreEvent::Toggled { id, completed } => {
                    if let Some(task) = self.store.get(id) {
                        let verb = if completed { "Done" } else { "Reopened" };
                        let message = format!("{}: {}", verb, task.text);
                        self.show_toast(message);
                    }
                }
                StoreEvent::Deleted(id) => {
                    tracing::debug!(id, "task removed from view");
                    self.show_toast("Deleted");
                }
                StoreEvent::ThemeChanged(theme) => {
                    self.colors = get_theme_colors(theme);
                    self.show_toast(format!("Theme: {}", theme.label()));
                }
            }
        }
        self.ensure_selection();
    }

    /// 在可见列表中选中指定任务（不可见时不变）
    fn select_task(&mut self, id: TaskId) {
        if let Some(index) = self.store.filtered_view(self.filter).position(|t| t.id == id) {
            self.list_state.select(Some(index));
        }
    }

    fn visible_len(&self) -> usize {
        self.store.filtered_view(self.filter).count()
    }

    /// 确保选中项在范围内
    fn ensure_selection(&mut self) {
        let len = self.visible_len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    // ========== Toast ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    fn show_error(&mut self, error: impl std::fmt::Display) {
        self.toast = Some(Toast::error(
            format!("Save failed: {}", error),
            Duration::from_secs(4),
        ));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
