use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode};
use crate::model::TaskFilter;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    match app.mode {
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

/// 帮助面板：任意关闭键返回
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
    ) {
        app.show_help = false;
    }
}

/// 输入模式的键盘事件
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// 浏览模式的键盘事件
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 完成 / 取消完成
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 删除
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),

        // 新任务
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('n') => app.start_editing(),

        // 过滤器
        KeyCode::Char('1') => app.set_filter(TaskFilter::All),
        KeyCode::Char('2') => app.set_filter(TaskFilter::Completed),
        KeyCode::Char('3') => app.set_filter(TaskFilter::Pending),
        KeyCode::Tab => app.cycle_filter(),

        // 主题
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),

        // 帮助
        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}
