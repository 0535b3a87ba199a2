//! 底部快捷键栏

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染 Footer（快捷键随当前模式变化）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    has_tasks: bool,
    input_active: bool,
    editing: bool,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(has_tasks, input_active, editing);

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

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(
    has_tasks: bool,
    input_active: bool,
    editing: bool,
) -> Vec<(&'static str, &'static str)> {
    if input_active {
        return vec![("Enter", "add"), ("Esc", "cancel")];
    }
    if editing {
        return vec![("Enter", "save"), ("Esc", "cancel")];
    }
    if has_tasks {
        vec![
            ("j/k", "move"),
            ("Space", "toggle"),
            ("a", "add"),
            ("e", "edit"),
            ("x", "delete"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![("a", "add"), ("t", "theme"), ("q", "quit")]
    }
}
