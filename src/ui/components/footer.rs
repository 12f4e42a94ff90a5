use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::InputMode;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    has_items: bool,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(mode, has_items);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(mode: InputMode, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Editing => vec![("Enter", "add"), ("Esc", "cancel")],
        InputMode::Normal => {
            if has_items {
                vec![
                    ("i", "new"),
                    ("Space", "done"),
                    ("d", "delete"),
                    ("Tab", "filter"),
                    ("t", "theme"),
                    ("?", "help"),
                    ("q", "quit"),
                ]
            } else {
                vec![
                    ("i", "new"),
                    ("Tab", "filter"),
                    ("t", "theme"),
                    ("q", "quit"),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_actions_hidden_when_empty() {
        let keys: Vec<_> = get_shortcuts(InputMode::Normal, false)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert!(!keys.contains(&"d"));
        assert!(get_shortcuts(InputMode::Normal, true)
            .iter()
            .any(|(k, _)| *k == "d"));
    }
}
