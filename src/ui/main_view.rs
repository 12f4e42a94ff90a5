//! 主页面渲染

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, InputMode};

use super::components::{
    empty_state, footer, header, help_panel, tabs, task_input, task_list, toast,
};

/// 渲染主页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, tabs_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),   // 标题
        Constraint::Length(task_input::INPUT_HEIGHT), // 输入框
        Constraint::Length(2),                        // 过滤器
        Constraint::Fill(1),                          // 列表
        Constraint::Length(3),                        // Footer
    ])
    .areas(area);

    header::render(
        frame,
        header_area,
        app.store.counts(),
        app.store.theme(),
        colors,
    );

    task_input::render(
        frame,
        input_area,
        &app.input,
        app.mode == InputMode::Editing,
        colors,
    );

    tabs::render(frame, tabs_area, app.filter, colors);

    // 渲染内容（任务列表或空状态）
    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        empty_state::render(frame, content_area, app.filter, colors);
    } else {
        let mut list_state = app.list_state.clone();
        task_list::render(frame, content_area, &tasks, &mut list_state, colors);
    }

    footer::render(frame, footer_area, app.mode, !app.store.is_empty(), colors);

    // 渲染 Toast
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, t, colors);
        }
    }

    // 渲染帮助面板
    if app.show_help {
        help_panel::render(frame, colors);
    }
}
