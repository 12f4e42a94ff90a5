use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

use super::truncate;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[&Task],
    list_state: &mut ListState,
    colors: &ThemeColors,
) {
    // 2 边框 + 选择器 + 复选框 + 删除提示
    let text_width = (area.width as usize).saturating_sub(14).max(1);

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let (checkbox, checkbox_style, text_style) = if task.completed {
                (
                    "[x]",
                    Style::default().fg(colors.done),
                    Style::default()
                        .fg(colors.muted)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                (
                    "[ ]",
                    Style::default().fg(colors.pending),
                    Style::default().fg(colors.text),
                )
            };

            ListItem::new(Line::from(vec![
                Span::styled(checkbox, checkbox_style),
                Span::raw(" "),
                Span::styled(truncate(&task.text, text_width), text_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .highlight_symbol(" ❯ ")
        .highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, list_state);
}
