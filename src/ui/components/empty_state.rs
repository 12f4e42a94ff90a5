use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::TaskFilter;
use crate::theme::ThemeColors;

/// 渲染空状态（带提示文字）
pub fn render(frame: &mut Frame, area: Rect, filter: TaskFilter, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let (message, hint) = get_hint_text(filter);

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " i ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(hint, Style::default().fg(colors.text)),
        ]),
    ];

    // 垂直居中
    let y_offset = inner_area.height.saturating_sub(3) / 2;
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + y_offset,
        width: inner_area.width,
        height: inner_area.height.min(3),
    };

    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hint_widget, centered_area);
}

fn get_hint_text(filter: TaskFilter) -> (&'static str, &'static str) {
    match filter {
        TaskFilter::All => ("No tasks yet", "to add one"),
        TaskFilter::Completed => ("Nothing completed yet", "to add a task"),
        TaskFilter::Pending => ("All caught up", "to add a task"),
    }
}
