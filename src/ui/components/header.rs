use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{TaskCounts, ThemePreference};
use crate::theme::{toggle_icon, ThemeColors};

/// Header 总高度：1 (上边框) + 1 (标题) + 1 (统计)
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部区域（标题 + 主题切换按钮 + 统计）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    counts: TaskCounts,
    theme: ThemePreference,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, stats_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner_area);

    let [title_left, title_right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(title_area);

    let title = Paragraph::new(Line::from(Span::styled(
        "  TODO LIST",
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, title_left);

    // 主题按钮显示的是“切换到”的图标
    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(toggle_icon(theme), Style::default().fg(colors.text)),
        Span::styled(" t ", Style::default().fg(colors.highlight)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, title_right);

    let stats = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("  {} tasks", counts.total),
            Style::default().fg(colors.muted),
        ),
        Span::styled("  ·  ", Style::default().fg(colors.border)),
        Span::styled(
            format!("{} done", counts.completed),
            Style::default().fg(colors.done),
        ),
        Span::styled("  ·  ", Style::default().fg(colors.border)),
        Span::styled(
            format!("{} pending", counts.pending),
            Style::default().fg(colors.pending),
        ),
    ]));
    frame.render_widget(stats, stats_area);
}
