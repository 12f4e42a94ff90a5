use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::TaskFilter;
use crate::theme::ThemeColors;

/// 渲染过滤器 Tab 栏
pub fn render(frame: &mut Frame, area: Rect, current: TaskFilter, colors: &ThemeColors) {
    let filters = TaskFilter::all();

    let mut spans = Vec::new();
    spans.push(Span::raw("   "));

    for (i, filter) in filters.iter().enumerate() {
        let label = format!("  {} {}  ", i + 1, filter.label());

        if *filter == current {
            // 选中的 Tab: 背景高亮块
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(colors.tab_active_fg)
                    .bg(colors.tab_active_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(colors.muted)));
        }

        if i < filters.len() - 1 {
            spans.push(Span::raw("  "));
        }
    }

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
