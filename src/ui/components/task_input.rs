//! 新任务输入框

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

pub const INPUT_HEIGHT: u16 = 3;

/// 渲染输入框
/// is_editing: 是否正在输入（显示光标）
pub fn render(frame: &mut Frame, area: Rect, input: &str, is_editing: bool, colors: &ThemeColors) {
    let mut spans = vec![Span::styled(" + ", Style::default().fg(colors.highlight))];

    if input.is_empty() && !is_editing {
        spans.push(Span::styled(
            "Press i to add a task...",
            Style::default().fg(colors.muted),
        ));
    } else {
        spans.push(Span::styled(input, Style::default().fg(colors.text)));
    }

    // 只在输入模式显示闪烁光标
    if is_editing {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let border_color = if is_editing {
        colors.highlight
    } else {
        colors.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .style(Style::default().bg(colors.bg_secondary));

    frame.render_widget(paragraph, area);
}
